/// Number of letters the machine works over (`A`..=`Z`).
pub const ALPHABET_SIZE: usize = 26;

/// Number of values a reflector configuration must contain (13 pairs).
pub const REFLECTOR_PARAMETER_COUNT: usize = ALPHABET_SIZE;

/// Maximum number of single-position steps needed to reach any rotor offset.
pub const MAX_ALIGNMENT_STEPS: usize = ALPHABET_SIZE;

/// Converts an uppercase ASCII letter into its alphabet index.
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(c as u8 - b'A')
    } else {
        None
    }
}

/// Converts an alphabet index back into its uppercase letter.
pub fn index_letter(i: u8) -> char {
    (b'A' + i % ALPHABET_SIZE as u8) as char
}
