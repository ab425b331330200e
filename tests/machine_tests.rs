mod common;

use common::{adjacent_reflector, letters, shifted_wiring, simple_spec};
use enigma::config::{MachineSpec, RotorSpec};
use enigma::error::{Component, EnigmaError};
use enigma::machine::{Machine, Plugboard, Reflector, Rotor};
use enigma::presets::{KnownReflector, KnownRotor};
use rstest::rstest;

// --- END TO END ---

#[test]
fn test_single_letter_by_hand() {
    // A -(plugboard)-> E -(rotor at 1: wiring[E+1] - 1)-> H -(reflector)-> G
    //   -(rotor backwards: index of G+1)-> D -(plugboard)-> D
    let mut machine = simple_spec().build().unwrap();
    assert_eq!(machine.process_inputs("A").unwrap(), "D");
    assert_eq!(machine.offsets(), vec![1]);
}

#[test]
fn test_same_configuration_same_output() {
    let mut first = simple_spec().build().unwrap();
    let mut second = simple_spec().build().unwrap();
    assert_eq!(
        first.process_inputs("A").unwrap(),
        second.process_inputs("A").unwrap()
    );
}

#[test]
fn test_letter_round_trip_from_same_state() {
    let mut machine = simple_spec().build().unwrap();
    assert_eq!(machine.process_inputs("D").unwrap(), "A");
}

#[test]
fn test_historical_enigma_i_vector() {
    // Reflector B, wheels I-II-III left to right, all at A, no cables.
    let spec = MachineSpec::from_presets(
        KnownReflector::B,
        &[KnownRotor::III, KnownRotor::II, KnownRotor::I],
        &[0, 0, 0],
        &[],
    );
    let mut machine = spec.build().unwrap();
    assert_eq!(machine.process_inputs("AAAAA").unwrap(), "BDZGO");
}

#[test]
fn test_historical_vector_across_turnover() {
    // The middle wheel turns over as III leaves V, before the 22nd letter.
    let spec = MachineSpec::from_presets(
        KnownReflector::B,
        &[KnownRotor::III, KnownRotor::II, KnownRotor::I],
        &[0, 0, 0],
        &[],
    );
    let mut machine = spec.build().unwrap();
    let out = machine.process_inputs(&"A".repeat(26)).unwrap();
    assert_eq!(out, "BDZGOWCXLTKSBTMCDLPBMUQOFX");
    assert_eq!(machine.offsets(), vec![0, 1, 0]);
}

#[test]
fn test_message_round_trip_after_reset() {
    let spec = MachineSpec::from_presets(
        KnownReflector::C,
        &[KnownRotor::V, KnownRotor::VI, KnownRotor::II],
        &[24, 11, 3],
        &letters("AQBZCYXD"),
    );
    let mut machine = spec.build().unwrap();
    let plain = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOGTHEQUICKBROWNFOX";
    let secret = machine.process_inputs(plain).unwrap();
    assert_ne!(secret, plain);

    machine.reset();
    assert_eq!(machine.offsets(), vec![24, 11, 3]);
    assert_eq!(machine.process_inputs(&secret).unwrap(), plain);
}

#[test]
fn test_no_letter_encodes_to_itself() {
    let mut machine = simple_spec().build().unwrap();
    let plain: String = std::iter::repeat("ABCDEFGHIJKLMNOPQRSTUVWXYZ")
        .take(4)
        .collect();
    let secret = machine.process_inputs(&plain).unwrap();
    for (p, c) in plain.chars().zip(secret.chars()) {
        assert_ne!(p, c);
    }
}

#[test]
fn test_zero_rotors_is_plugboard_and_reflector() {
    let pb = Plugboard::new(&[0, 4]).unwrap();
    let rf = Reflector::new(&adjacent_reflector()).unwrap();
    let mut machine = Machine::new(pb, rf, Vec::new(), &[]).unwrap();
    // A -> E -> F -> F
    assert_eq!(machine.process_inputs("AAA").unwrap(), "FFF");
}

// --- INPUT HANDLING ---

#[test]
fn test_whitespace_is_skipped_without_stepping() {
    let mut spaced = simple_spec().build().unwrap();
    let mut packed = simple_spec().build().unwrap();
    let a = spaced.process_inputs("HELLO WORLD\n").unwrap();
    let b = packed.process_inputs("HELLOWORLD").unwrap();
    assert_eq!(a, b);
    assert_eq!(spaced.offsets(), packed.offsets());
}

#[test]
fn test_invalid_character_reports_partial_output() {
    let mut machine = simple_spec().build().unwrap();
    let err = machine.process_inputs("AB c").unwrap_err();

    let mut reference = simple_spec().build().unwrap();
    let expected = reference.process_inputs("AB").unwrap();

    assert_eq!(
        err,
        EnigmaError::InvalidInputCharacter {
            character: 'c',
            processed: expected,
        }
    );
    assert_eq!(err.exit_code(), 2);
}

// --- STEPPING ---

fn identity_rotor(notch: u8) -> RotorSpec {
    RotorSpec {
        wiring: shifted_wiring(0),
        notches: vec![notch],
    }
}

fn three_rotor_spec(positions: Vec<u8>) -> MachineSpec {
    MachineSpec {
        plugboard: vec![],
        reflector: adjacent_reflector(),
        rotors: vec![identity_rotor(5), identity_rotor(12), identity_rotor(20)],
        positions,
    }
}

#[test]
fn test_cascade_when_notch_is_next() {
    let mut machine = three_rotor_spec(vec![4, 7, 9]).build().unwrap();
    machine.process_inputs("Q").unwrap();
    assert_eq!(machine.offsets(), vec![5, 8, 9]);
}

#[test]
fn test_no_cascade_when_notch_is_not_next() {
    let mut machine = three_rotor_spec(vec![3, 7, 9]).build().unwrap();
    machine.process_inputs("Q").unwrap();
    assert_eq!(machine.offsets(), vec![4, 7, 9]);
}

#[test]
fn test_cascade_reaches_third_rotor() {
    let mut machine = three_rotor_spec(vec![4, 11, 9]).build().unwrap();
    machine.process_inputs("Q").unwrap();
    assert_eq!(machine.offsets(), vec![5, 12, 10]);
}

#[test]
fn test_middle_rotor_turns_once_per_revolution() {
    let mut machine = three_rotor_spec(vec![0, 0, 0]).build().unwrap();
    let message = "A".repeat(26 * 3);
    machine.process_inputs(&message).unwrap();
    assert_eq!(machine.offsets(), vec![0, 3, 0]);
}

// --- VALIDATION ---

#[rstest]
#[case::odd_plugboard(
    MachineSpec { plugboard: vec![0, 1, 2], ..simple_spec() },
    EnigmaError::IncorrectParameterCount { component: Component::Plugboard, count: 3 }
)]
#[case::reused_plug(
    MachineSpec { plugboard: vec![0, 1, 2, 0], ..simple_spec() },
    EnigmaError::ImpossiblePlugboardConfiguration { letter: 0 }
)]
#[case::short_reflector(
    MachineSpec { reflector: (0..24).collect(), ..simple_spec() },
    EnigmaError::IncorrectParameterCount { component: Component::Reflector, count: 24 }
)]
#[case::long_reflector(
    MachineSpec { reflector: (0..26).chain([0, 1]).collect(), ..simple_spec() },
    EnigmaError::IncorrectParameterCount { component: Component::Reflector, count: 28 }
)]
#[case::missing_position(
    MachineSpec { positions: vec![], ..simple_spec() },
    EnigmaError::MissingStartingPosition { rotor: 0 }
)]
fn test_setup_rejects(#[case] spec: MachineSpec, #[case] expected: EnigmaError) {
    assert_eq!(spec.build().unwrap_err(), expected);
}

#[test]
fn test_reflector_self_mapping_rejected() {
    let mut reflector = adjacent_reflector();
    reflector[3] = 2; // pair (C, C)
    let spec = MachineSpec {
        reflector,
        ..simple_spec()
    };
    let err = spec.build().unwrap_err();
    assert!(matches!(err, EnigmaError::InvalidReflectorMapping { letter: 2 }));
    assert_eq!(err.exit_code(), 9);
}

#[test]
fn test_rotor_missing_letter_rejected() {
    let mut wiring = shifted_wiring(0);
    wiring[10] = 11; // 10 now missing, 11 twice
    let err = Rotor::new(&wiring, &[]).unwrap_err();
    assert!(matches!(err, EnigmaError::InvalidRotorMapping { .. }));
}

#[rstest]
#[case(26)]
#[case(40)]
#[case(255)]
fn test_out_of_range_start_rejected(#[case] position: u8) {
    let spec = MachineSpec {
        positions: vec![position],
        ..simple_spec()
    };
    let err = spec.build().unwrap_err();
    assert!(matches!(err, EnigmaError::InvalidIndex { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_extra_positions_ignored() {
    let spec = MachineSpec {
        positions: vec![2, 9, 9],
        ..simple_spec()
    };
    assert_eq!(spec.build().unwrap().offsets(), vec![2]);
}
