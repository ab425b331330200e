use crate::consts::ALPHABET_SIZE;
use crate::error::{EnigmaError, EnigmaResult};
use crate::loader;
use crate::machine::{Machine, Plugboard, Reflector, Rotor};
use crate::presets::{KnownReflector, KnownRotor};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the machine description comes from on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct MachineArgs {
    /// <plugboard> <reflector> [<rotor>...] <positions>
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Load the whole machine from a JSON description instead of FILES.
    #[arg(long, conflicts_with = "files")]
    pub spec: Option<PathBuf>,
}

impl MachineArgs {
    pub fn resolve(&self) -> EnigmaResult<MachineSpec> {
        if let Some(path) = &self.spec {
            return MachineSpec::load_from_json(path);
        }
        MachineSpec::load_from_files(&self.files)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    pub wiring: Vec<u8>,
    #[serde(default)]
    pub notches: Vec<u8>,
}

impl RotorSpec {
    /// Splits a rotor file's values: 26 wiring entries, then notch positions.
    pub fn from_values(mut values: Vec<u8>) -> Self {
        let notches = values.split_off(values.len().min(ALPHABET_SIZE));
        Self {
            wiring: values,
            notches,
        }
    }

    /// Rotor file layout: wiring followed by notches.
    pub fn to_values(&self) -> Vec<u8> {
        let mut values = self.wiring.clone();
        values.extend_from_slice(&self.notches);
        values
    }
}

/// Plain-data description of a complete machine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MachineSpec {
    #[serde(default)]
    pub plugboard: Vec<u8>,
    pub reflector: Vec<u8>,
    #[serde(default)]
    pub rotors: Vec<RotorSpec>,
    #[serde(default)]
    pub positions: Vec<u8>,
}

impl MachineSpec {
    /// Loads `<plugboard> <reflector> [<rotor>...] <positions>`.
    pub fn load_from_files<P: AsRef<Path>>(files: &[P]) -> EnigmaResult<Self> {
        let [plugboard_path, reflector_path, rotor_paths @ .., positions_path] = files else {
            return Err(EnigmaError::InsufficientParameters);
        };

        info!("📂 Loading machine from {} file(s)", files.len());

        let plugboard = loader::load_values(plugboard_path)?;
        let reflector = loader::load_values(reflector_path)?;

        let mut rotors = Vec::with_capacity(rotor_paths.len());
        for path in rotor_paths {
            rotors.push(RotorSpec::from_values(loader::load_values(path)?));
        }

        let positions = loader::load_values(positions_path)?;

        Ok(Self {
            plugboard,
            reflector,
            rotors,
            positions,
        })
    }

    pub fn load_from_json<P: AsRef<Path>>(path: P) -> EnigmaResult<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| EnigmaError::ConfigurationFileUnreadable {
                path: name.clone(),
                reason: e.to_string(),
            })?;
        info!("📂 Loading machine description: {}", name);
        Self::from_json(&content).map_err(|e| e.with_source(&name))
    }

    /// Parses a JSON description. Malformed or non-integer content is reported
    /// as a non-numeric token.
    pub fn from_json(content: &str) -> EnigmaResult<Self> {
        serde_json::from_str(content).map_err(|e| EnigmaError::NonNumericToken {
            token: e.to_string(),
            source_name: "machine description".to_string(),
        })
    }

    pub fn to_json(&self) -> String {
        // Only integers and vectors; serialisation cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Assembles a spec from historical wheels, listed rightmost first.
    pub fn from_presets(
        reflector: KnownReflector,
        rotors: &[KnownRotor],
        positions: &[u8],
        plugboard: &[u8],
    ) -> Self {
        Self {
            plugboard: plugboard.to_vec(),
            reflector: reflector.to_values(),
            rotors: rotors.iter().map(KnownRotor::to_spec).collect(),
            positions: positions.to_vec(),
        }
    }

    /// Validates every component and returns the assembled machine.
    pub fn build(&self) -> EnigmaResult<Machine> {
        let plugboard = Plugboard::new(&self.plugboard)?;
        let reflector = Reflector::new(&self.reflector)?;
        let rotors = self
            .rotors
            .iter()
            .map(|r| Rotor::new(&r.wiring, &r.notches))
            .collect::<EnigmaResult<Vec<_>>>()?;
        Machine::new(plugboard, reflector, rotors, &self.positions)
    }
}
