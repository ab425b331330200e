use super::permutation::{Permutation, PermutationError};
use crate::consts::{index_letter, ALPHABET_SIZE, MAX_ALIGNMENT_STEPS};
use crate::error::{Component, EnigmaError, EnigmaResult};

const N: u8 = ALPHABET_SIZE as u8;

/// Which way the signal is travelling through a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plugboard towards reflector.
    Forward,
    /// Reflector back towards plugboard.
    Backward,
}

/// A wired wheel with turnover notches.
///
/// The wiring table physically rotates on every step; `offset` counts how far
/// it has turned so substitutions stay anchored to absolute letter positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Permutation,
    notches: Vec<u8>,
    notch_mask: [bool; ALPHABET_SIZE],
    offset: u8,
}

impl Rotor {
    pub fn new(wiring: &[u8], notches: &[u8]) -> EnigmaResult<Self> {
        let wiring = Permutation::new(wiring).map_err(|e| match e {
            PermutationError::InvalidIndex(v) => EnigmaError::invalid_index(v, Component::Rotor),
            PermutationError::DuplicateMapping(v) => EnigmaError::InvalidRotorMapping {
                reason: format!("letter {} is wired more than once", index_letter(v)),
            },
            PermutationError::WrongLength(n) => EnigmaError::IncorrectParameterCount {
                component: Component::Rotor,
                count: n,
            },
        })?;

        let mut notch_mask = [false; ALPHABET_SIZE];
        for &n in notches {
            if n >= N {
                return Err(EnigmaError::invalid_index(n, Component::Rotor));
            }
            if notch_mask[n as usize] {
                return Err(EnigmaError::InvalidRotorMapping {
                    reason: format!("notch {} is listed more than once", index_letter(n)),
                });
            }
            notch_mask[n as usize] = true;
        }

        Ok(Self {
            wiring,
            notches: notches.to_vec(),
            notch_mask,
            offset: 0,
        })
    }

    /// Advances one position. Returns true when the new offset is a notch.
    pub fn step(&mut self) -> bool {
        self.wiring.rotate();
        self.offset = (self.offset + 1) % N;
        self.notch_mask[self.offset as usize]
    }

    /// Steps forward until `offset == target`; never more than a full turn.
    pub fn set_starting_position(&mut self, target: u8) -> EnigmaResult<()> {
        if target >= N {
            return Err(EnigmaError::InvalidIndex {
                value: target.into(),
                source_name: "starting positions".to_string(),
            });
        }
        for _ in 0..MAX_ALIGNMENT_STEPS {
            if self.offset == target {
                break;
            }
            self.step();
        }
        Ok(())
    }

    /// `input` must be below 26.
    pub fn process(&self, input: u8, direction: Direction) -> u8 {
        match direction {
            Direction::Forward => (self.wiring.map(input) + N - self.offset) % N,
            Direction::Backward => {
                let target = (input + self.offset) % N;
                self.wiring.invert(target)
            }
        }
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn notches(&self) -> &[u8] {
        &self.notches
    }

    /// The wiring table as currently rotated.
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }
}
