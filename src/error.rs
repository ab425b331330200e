use strum_macros::Display;
use thiserror::Error;

/// The machine part a configuration error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Component {
    Plugboard,
    Reflector,
    Rotor,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    #[error("Insufficient parameters: expected <plugboard> <reflector> [<rotor>...] <positions>")]
    InsufficientParameters,

    #[error("Could not open configuration file '{path}': {reason}")]
    ConfigurationFileUnreadable { path: String, reason: String },

    #[error("Non-numeric token '{token}' in {source_name}")]
    NonNumericToken { token: String, source_name: String },

    #[error("Invalid index {value} in {source_name}: expected a value in 0..=25")]
    InvalidIndex { value: i64, source_name: String },

    #[error("Incorrect number of {component} parameters: got {count}")]
    IncorrectParameterCount { component: Component, count: usize },

    #[error("Impossible plugboard configuration: letter {letter} is connected more than once")]
    ImpossiblePlugboardConfiguration { letter: u8 },

    #[error("Invalid reflector mapping: letter {letter} is not mapped exactly once")]
    InvalidReflectorMapping { letter: u8 },

    #[error("Invalid rotor mapping: {reason}")]
    InvalidRotorMapping { reason: String },

    #[error("No starting position for rotor {rotor}")]
    MissingStartingPosition { rotor: usize },

    #[error("Invalid input character '{character}' (only A-Z are accepted)")]
    InvalidInputCharacter { character: char, processed: String },
}

impl EnigmaError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InsufficientParameters => 1,
            Self::InvalidInputCharacter { .. } => 2,
            Self::InvalidIndex { .. } => 3,
            Self::NonNumericToken { .. } => 4,
            Self::ImpossiblePlugboardConfiguration { .. } => 5,
            Self::IncorrectParameterCount { component, .. } => match component {
                Component::Plugboard => 6,
                Component::Rotor => 7,
                Component::Reflector => 10,
            },
            Self::InvalidRotorMapping { .. } => 7,
            Self::MissingStartingPosition { .. } => 8,
            Self::InvalidReflectorMapping { .. } => 9,
            Self::ConfigurationFileUnreadable { .. } => 11,
        }
    }

    /// Attaches a file name to errors raised while parsing anonymous data.
    pub fn with_source(self, name: &str) -> Self {
        match self {
            Self::NonNumericToken { token, .. } => Self::NonNumericToken {
                token,
                source_name: name.to_string(),
            },
            Self::InvalidIndex { value, .. } => Self::InvalidIndex {
                value,
                source_name: name.to_string(),
            },
            other => other,
        }
    }

    pub(crate) fn invalid_index(value: impl Into<i64>, component: Component) -> Self {
        Self::InvalidIndex {
            value: value.into(),
            source_name: component.to_string(),
        }
    }
}

pub type EnigmaResult<T> = Result<T, EnigmaError>;
