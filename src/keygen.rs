use crate::config::{MachineSpec, RotorSpec};
use crate::consts::ALPHABET_SIZE;
use tracing::debug;

fn shuffled_alphabet(rng: &mut fastrand::Rng) -> Vec<u8> {
    let mut letters: Vec<u8> = (0..ALPHABET_SIZE as u8).collect();
    rng.shuffle(&mut letters);
    letters
}

/// `pairs` disjoint cables (capped at 13).
pub fn random_plugboard(rng: &mut fastrand::Rng, pairs: usize) -> Vec<u8> {
    let mut letters = shuffled_alphabet(rng);
    letters.truncate(pairs.min(ALPHABET_SIZE / 2) * 2);
    letters
}

/// A fixed-point-free involution as 13 pairs.
pub fn random_reflector(rng: &mut fastrand::Rng) -> Vec<u8> {
    shuffled_alphabet(rng)
}

pub fn random_rotor(rng: &mut fastrand::Rng, notch_count: usize) -> RotorSpec {
    let wiring = shuffled_alphabet(rng);
    let mut notches = shuffled_alphabet(rng);
    notches.truncate(notch_count.min(ALPHABET_SIZE));
    notches.sort_unstable();
    RotorSpec { wiring, notches }
}

pub fn random_positions(rng: &mut fastrand::Rng, count: usize) -> Vec<u8> {
    (0..count).map(|_| rng.u8(0..ALPHABET_SIZE as u8)).collect()
}

/// A complete random machine. Every rotor gets a single notch.
pub fn random_spec(rng: &mut fastrand::Rng, rotors: usize, pairs: usize) -> MachineSpec {
    let spec = MachineSpec {
        plugboard: random_plugboard(rng, pairs),
        reflector: random_reflector(rng),
        rotors: (0..rotors).map(|_| random_rotor(rng, 1)).collect(),
        positions: random_positions(rng, rotors),
    };
    debug!(
        "Generated machine: {} rotor(s), {} cable(s)",
        spec.rotors.len(),
        spec.plugboard.len() / 2
    );
    spec
}
