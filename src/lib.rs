//! Configurable rotor cipher machine in the style of the Enigma.
//!
//! A letter travels plugboard → rotors → reflector → rotors (reversed) →
//! plugboard, and the rotors step before every letter.
//!
//! ```
//! use enigma::config::MachineSpec;
//! use enigma::presets::{KnownReflector, KnownRotor};
//!
//! let spec = MachineSpec::from_presets(
//!     KnownReflector::B,
//!     &[KnownRotor::III, KnownRotor::II, KnownRotor::I],
//!     &[0, 0, 0],
//!     &[],
//! );
//! let mut machine = spec.build().unwrap();
//! let secret = machine.process_inputs("HELLO WORLD").unwrap();
//!
//! machine.reset();
//! assert_eq!(machine.process_inputs(&secret).unwrap(), "HELLOWORLD");
//! ```

pub mod config;
pub mod consts;
pub mod error;
pub mod keygen;
pub mod loader;
pub mod machine;
pub mod presets;
