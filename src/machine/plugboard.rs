use super::permutation::Permutation;
use crate::consts::ALPHABET_SIZE;
use crate::error::{Component, EnigmaError, EnigmaResult};
use tracing::debug;

/// Swaps letters connected by a cable; everything else passes through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(u8, u8)>,
    table: Permutation,
}

impl Plugboard {
    /// Builds a plugboard from interleaved pairs `[a0, b0, a1, b1, ...]`.
    pub fn new(values: &[u8]) -> EnigmaResult<Self> {
        if values.len() % 2 != 0 {
            return Err(EnigmaError::IncorrectParameterCount {
                component: Component::Plugboard,
                count: values.len(),
            });
        }

        let mut used = [false; ALPHABET_SIZE];
        for &v in values {
            if v as usize >= ALPHABET_SIZE {
                return Err(EnigmaError::invalid_index(v, Component::Plugboard));
            }
            if used[v as usize] {
                return Err(EnigmaError::ImpossiblePlugboardConfiguration { letter: v });
            }
            used[v as usize] = true;
        }

        let pairs: Vec<(u8, u8)> = values.chunks_exact(2).map(|p| (p[0], p[1])).collect();
        debug!("Plugboard: {} cable(s)", pairs.len());

        Ok(Self {
            table: Permutation::from_pairs(&pairs),
            pairs,
        })
    }

    #[inline]
    pub fn process(&self, letter: u8) -> u8 {
        self.table.map(letter)
    }

    pub fn pairs(&self) -> &[(u8, u8)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
