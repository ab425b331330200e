use crate::consts::ALPHABET_SIZE;
use crate::error::{EnigmaError, EnigmaResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses whitespace-separated letter indices.
pub fn parse_values(text: &str, source_name: &str) -> EnigmaResult<Vec<u8>> {
    let mut values = Vec::new();
    for token in text.split_ascii_whitespace() {
        let value: i64 = match token.parse() {
            Ok(v) => v,
            Err(_) if is_integer_literal(token) => {
                // Too large for i64; clamp so the range check reports it.
                if token.starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                }
            }
            Err(_) => {
                return Err(EnigmaError::NonNumericToken {
                    token: token.to_string(),
                    source_name: source_name.to_string(),
                })
            }
        };
        if !(0..ALPHABET_SIZE as i64).contains(&value) {
            return Err(EnigmaError::InvalidIndex {
                value,
                source_name: source_name.to_string(),
            });
        }
        values.push(value as u8);
    }
    Ok(values)
}

fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Reads and parses a configuration file.
pub fn load_values<P: AsRef<Path>>(path: P) -> EnigmaResult<Vec<u8>> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let text =
        fs::read_to_string(path).map_err(|e| EnigmaError::ConfigurationFileUnreadable {
            path: name.clone(),
            reason: e.to_string(),
        })?;

    let values = parse_values(&text, &name)?;
    debug!("Loaded {} value(s) from {}", values.len(), name);
    Ok(values)
}

/// Writes values in the same whitespace-separated form `load_values` reads.
pub fn save_values<P: AsRef<Path>>(path: P, values: &[u8]) -> EnigmaResult<()> {
    let path = path.as_ref();
    let text = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    fs::write(path, text + "\n").map_err(|e| EnigmaError::ConfigurationFileUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
