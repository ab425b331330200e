use crate::consts::ALPHABET_SIZE;
use thiserror::Error;

/// Why a value list is not a bijection over the alphabet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationError {
    #[error("value {0} is outside the alphabet")]
    InvalidIndex(u8),
    #[error("value {0} appears more than once")]
    DuplicateMapping(u8),
    #[error("expected 26 values, got {0}")]
    WrongLength(usize),
}

/// A bijection over `0..ALPHABET_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permutation {
    table: [u8; ALPHABET_SIZE],
}

impl Permutation {
    pub fn identity() -> Self {
        let mut table = [0u8; ALPHABET_SIZE];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { table }
    }

    /// Builds a permutation from exactly `ALPHABET_SIZE` values.
    pub fn new(values: &[u8]) -> Result<Self, PermutationError> {
        if values.len() != ALPHABET_SIZE {
            return Err(PermutationError::WrongLength(values.len()));
        }

        let mut seen = [false; ALPHABET_SIZE];
        let mut table = [0u8; ALPHABET_SIZE];
        for (slot, &v) in table.iter_mut().zip(values) {
            if v as usize >= ALPHABET_SIZE {
                return Err(PermutationError::InvalidIndex(v));
            }
            if seen[v as usize] {
                return Err(PermutationError::DuplicateMapping(v));
            }
            seen[v as usize] = true;
            *slot = v;
        }
        Ok(Self { table })
    }

    /// Builds the involution that swaps every `(a, b)` pair and fixes the rest.
    /// Pairs must already be validated as disjoint.
    pub(crate) fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        let mut perm = Self::identity();
        for &(a, b) in pairs {
            perm.table[a as usize] = b;
            perm.table[b as usize] = a;
        }
        perm
    }

    #[inline]
    pub fn map(&self, i: u8) -> u8 {
        self.table[i as usize]
    }

    /// Reverse lookup: the index holding `v`.
    pub fn invert(&self, v: u8) -> u8 {
        self.table
            .iter()
            .position(|&x| x == v)
            .map(|i| i as u8)
            .unwrap_or(v)
    }

    /// Cyclic shift by one: index 0 moves to the end, everything else moves down.
    pub fn rotate(&mut self) {
        self.table.rotate_left(1);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; ALPHABET_SIZE];
        for &v in &self.table {
            if v as usize >= ALPHABET_SIZE || seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        true
    }
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}
