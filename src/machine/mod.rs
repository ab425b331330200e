pub mod bank;
pub mod permutation;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use self::bank::RotorBank;
pub use self::permutation::{Permutation, PermutationError};
pub use self::plugboard::Plugboard;
pub use self::reflector::Reflector;
pub use self::rotor::{Direction, Rotor};

use crate::consts::{index_letter, letter_index};
use crate::error::{EnigmaError, EnigmaResult};
use tracing::{info, trace};

/// The assembled signal path: plugboard, rotors, reflector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    plugboard: Plugboard,
    reflector: Reflector,
    bank: RotorBank,
    start_positions: Vec<u8>,
}

impl Machine {
    pub fn new(
        plugboard: Plugboard,
        reflector: Reflector,
        rotors: Vec<Rotor>,
        positions: &[u8],
    ) -> EnigmaResult<Self> {
        let mut bank = RotorBank::new(rotors);
        bank.set_positions(positions)?;

        let start_positions = bank.offsets();
        info!(
            "Machine assembled: {} cable(s), {} rotor(s), start {:?}",
            plugboard.pairs().len(),
            bank.len(),
            start_positions
        );

        Ok(Self {
            plugboard,
            reflector,
            bank,
            start_positions,
        })
    }

    /// Encodes one letter index, stepping the rotors first.
    ///
    /// Panics if `letter` is not below 26; `process_char` checks for you.
    pub fn process(&mut self, letter: u8) -> u8 {
        let mut l = self.plugboard.process(letter);
        if !self.bank.is_empty() {
            l = self.bank.step_and_process(l, Direction::Forward);
        }
        l = self.reflector.process(l);
        if !self.bank.is_empty() {
            l = self.bank.step_and_process(l, Direction::Backward);
        }
        let out = self.plugboard.process(l);
        trace!("{} -> {}", index_letter(letter), index_letter(out));
        out
    }

    /// Encodes an uppercase letter. Returns `None` for anything else.
    pub fn process_char(&mut self, c: char) -> Option<char> {
        letter_index(c).map(|i| index_letter(self.process(i)))
    }

    /// Encodes a message. Whitespace is skipped; any other non `A`-`Z`
    /// character stops processing and is reported with the output so far.
    pub fn process_inputs(&mut self, input: &str) -> EnigmaResult<String> {
        let mut output = String::with_capacity(input.len());
        for c in input.chars() {
            if c.is_ascii_whitespace() {
                continue;
            }
            match self.process_char(c) {
                Some(out) => output.push(out),
                None => {
                    return Err(EnigmaError::InvalidInputCharacter {
                        character: c,
                        processed: output,
                    })
                }
            }
        }
        Ok(output)
    }

    /// Returns every rotor to its configured starting position.
    pub fn reset(&mut self) {
        for (rotor, &pos) in self
            .bank
            .rotors_mut()
            .iter_mut()
            .zip(&self.start_positions)
        {
            // Positions were validated when the machine was assembled.
            let _ = rotor.set_starting_position(pos);
        }
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn rotors(&self) -> &[Rotor] {
        self.bank.rotors()
    }

    pub fn offsets(&self) -> Vec<u8> {
        self.bank.offsets()
    }

    pub fn start_positions(&self) -> &[u8] {
        &self.start_positions
    }
}
