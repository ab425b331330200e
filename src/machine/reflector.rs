use super::permutation::Permutation;
use crate::consts::{ALPHABET_SIZE, REFLECTOR_PARAMETER_COUNT};
use crate::error::{Component, EnigmaError, EnigmaResult};
use tracing::debug;

/// Fixed-point-free involution that turns the signal back through the rotors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    pairs: Vec<(u8, u8)>,
    table: Permutation,
}

impl Reflector {
    /// Builds a reflector from 13 interleaved pairs covering every letter once.
    pub fn new(values: &[u8]) -> EnigmaResult<Self> {
        if values.len() > REFLECTOR_PARAMETER_COUNT {
            return Err(EnigmaError::IncorrectParameterCount {
                component: Component::Reflector,
                count: values.len(),
            });
        }

        let mut used = [false; ALPHABET_SIZE];
        for &v in values {
            if v as usize >= ALPHABET_SIZE {
                return Err(EnigmaError::invalid_index(v, Component::Reflector));
            }
            if used[v as usize] {
                return Err(EnigmaError::InvalidReflectorMapping { letter: v });
            }
            used[v as usize] = true;
        }

        if values.len() != REFLECTOR_PARAMETER_COUNT {
            return Err(EnigmaError::IncorrectParameterCount {
                component: Component::Reflector,
                count: values.len(),
            });
        }

        let pairs: Vec<(u8, u8)> = values.chunks_exact(2).map(|p| (p[0], p[1])).collect();
        debug!("Reflector: {} pairs", pairs.len());

        Ok(Self {
            table: Permutation::from_pairs(&pairs),
            pairs,
        })
    }

    /// Builds a reflector from a full letter-to-letter table, e.g. `YRUHQ...`.
    pub fn from_table(table: &[u8]) -> EnigmaResult<Self> {
        let perm = Permutation::new(table).map_err(|e| match e {
            super::PermutationError::InvalidIndex(v) => {
                EnigmaError::invalid_index(v, Component::Reflector)
            }
            super::PermutationError::DuplicateMapping(v) => {
                EnigmaError::InvalidReflectorMapping { letter: v }
            }
            super::PermutationError::WrongLength(n) => EnigmaError::IncorrectParameterCount {
                component: Component::Reflector,
                count: n,
            },
        })?;

        let mut pairs = Vec::with_capacity(ALPHABET_SIZE / 2);
        for a in 0..ALPHABET_SIZE as u8 {
            let b = perm.map(a);
            if b == a || perm.map(b) != a {
                return Err(EnigmaError::InvalidReflectorMapping { letter: a });
            }
            if a < b {
                pairs.push((a, b));
            }
        }

        Ok(Self { pairs, table: perm })
    }

    #[inline]
    pub fn process(&self, letter: u8) -> u8 {
        self.table.map(letter)
    }

    pub fn pairs(&self) -> &[(u8, u8)] {
        &self.pairs
    }

    /// The reflector as a flat pair list, the form `new` accepts.
    pub fn to_values(&self) -> Vec<u8> {
        self.pairs.iter().flat_map(|&(a, b)| [a, b]).collect()
    }
}
