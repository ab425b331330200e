use super::rotor::{Direction, Rotor};
use crate::error::{EnigmaError, EnigmaResult};
use tracing::debug;

/// Ordered rotors; index 0 is the rightmost wheel, next to the plugboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotorBank {
    rotors: Vec<Rotor>,
}

impl RotorBank {
    pub fn new(rotors: Vec<Rotor>) -> Self {
        Self { rotors }
    }

    /// Turns every rotor to its starting position. Extra positions are ignored.
    pub fn set_positions(&mut self, positions: &[u8]) -> EnigmaResult<()> {
        if positions.len() < self.rotors.len() {
            return Err(EnigmaError::MissingStartingPosition {
                rotor: positions.len(),
            });
        }
        for (rotor, &pos) in self.rotors.iter_mut().zip(positions) {
            rotor.set_starting_position(pos)?;
        }
        Ok(())
    }

    /// One stepping cycle: rotor 0 always moves, each further rotor moves only
    /// when its right-hand neighbour just reached a notch. Returns how many moved.
    pub fn step(&mut self) -> usize {
        let count = self.rotors.len();
        let mut carry = true;
        let mut moved = 0;
        for (i, rotor) in self.rotors.iter_mut().enumerate() {
            if !carry {
                break;
            }
            carry = rotor.step();
            moved += 1;
            if carry && i + 1 < count {
                debug!("Rotor {} reached a notch at {}", i, rotor.offset());
            }
        }
        moved
    }

    /// Forward: step then substitute, right to left. Backward: substitute only,
    /// left to right, retracing the forward path.
    ///
    /// A rotor's substitution never depends on wheels to its left, so running
    /// the whole stepping cycle first gives the same result as interleaving.
    pub fn step_and_process(&mut self, letter: u8, direction: Direction) -> u8 {
        match direction {
            Direction::Forward => {
                self.step();
                self.rotors
                    .iter()
                    .fold(letter, |l, rotor| rotor.process(l, Direction::Forward))
            }
            Direction::Backward => self
                .rotors
                .iter()
                .rev()
                .fold(letter, |l, rotor| rotor.process(l, Direction::Backward)),
        }
    }

    pub fn offsets(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::offset).collect()
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub(crate) fn rotors_mut(&mut self) -> &mut [Rotor] {
        &mut self.rotors
    }

    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }
}
