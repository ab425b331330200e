#![allow(dead_code)]

use enigma::config::{MachineSpec, RotorSpec};
use std::fs;
use std::path::{Path, PathBuf};

/// Wiring where every letter moves `by` places forward.
pub fn shifted_wiring(by: u8) -> Vec<u8> {
    (0..26).map(|i| (i + by) % 26).collect()
}

/// Reflector pairs (A,B), (C,D), ... (Y,Z).
pub fn adjacent_reflector() -> Vec<u8> {
    (0..26).collect()
}

pub fn letters(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'A').collect()
}

/// Plugboard A<->E, one Caesar-3 rotor notched at Z, adjacent-pair reflector.
pub fn simple_spec() -> MachineSpec {
    MachineSpec {
        plugboard: vec![0, 4],
        reflector: adjacent_reflector(),
        rotors: vec![RotorSpec {
            wiring: shifted_wiring(3),
            notches: vec![25],
        }],
        positions: vec![0],
    }
}

/// Writes a value list the way configuration files are laid out.
pub fn write_values(dir: &Path, name: &str, values: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let text: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    fs::write(&path, text.join(" ")).unwrap();
    path
}

pub fn write_text(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

/// Writes `spec` as plugboard, reflector, rotor and position files, in
/// command-line order.
pub fn write_spec_files(dir: &Path, spec: &MachineSpec) -> Vec<PathBuf> {
    let mut files = vec![
        write_values(dir, "test.pb", &spec.plugboard),
        write_values(dir, "test.rf", &spec.reflector),
    ];
    for (i, r) in spec.rotors.iter().enumerate() {
        files.push(write_values(dir, &format!("r{}.rot", i), &r.to_values()));
    }
    files.push(write_values(dir, "test.pos", &spec.positions));
    files
}
