use crate::config::RotorSpec;
use strum_macros::{Display, EnumIter, EnumString};

/// Wheels issued with the Enigma I and M3/M4 machines.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum KnownRotor {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl KnownRotor {
    pub fn wiring_str(&self) -> &'static str {
        match self {
            Self::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            Self::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            Self::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            Self::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            Self::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
            Self::VI => "JPGVOUMFYQBENHZRDKASXLICTW",
            Self::VII => "NZJHGRCXMYSWBOUFAIVLPEKQDT",
            Self::VIII => "FKQHTLXOCBJSPDZRAMEWNIUYGV",
        }
    }

    /// Positions whose arrival turns the next wheel over: one past the
    /// letter stamped on the notch (I turns over leaving Q, so R). VI-VIII carry two.
    pub fn notch_str(&self) -> &'static str {
        match self {
            Self::I => "R",
            Self::II => "F",
            Self::III => "W",
            Self::IV => "K",
            Self::V => "A",
            Self::VI | Self::VII | Self::VIII => "AN",
        }
    }

    pub fn to_spec(&self) -> RotorSpec {
        RotorSpec {
            wiring: letters_to_indices(self.wiring_str()),
            notches: letters_to_indices(self.notch_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum KnownReflector {
    B,
    C,
}

impl KnownReflector {
    /// Full letter table (A maps to the first letter, and so on).
    pub fn table_str(&self) -> &'static str {
        match self {
            Self::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            Self::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }

    /// The table folded into the 13-pair form reflector files use.
    pub fn to_values(&self) -> Vec<u8> {
        let table = letters_to_indices(self.table_str());
        let mut values = Vec::with_capacity(table.len());
        for (a, &b) in table.iter().enumerate() {
            if (a as u8) < b {
                values.push(a as u8);
                values.push(b);
            }
        }
        values
    }
}

fn letters_to_indices(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'A').collect()
}
