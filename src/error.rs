use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    InputTooLong { len: usize },
    MalformedSettings(&'static str),
    EncodingInvariant { expected: usize, actual: usize },
    RandomUnavailable,
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::InputTooLong { len } => {
                write!(f, "password is {len} bytes, the limit is 512")
            }
            HashError::MalformedSettings(reason) => write!(f, "malformed settings: {reason}"),
            HashError::EncodingInvariant { expected, actual } => write!(
                f,
                "encoded hash has {actual} characters, expected {expected}"
            ),
            HashError::RandomUnavailable => write!(f, "OS random generator unavailable"),
        }
    }
}

impl std::error::Error for HashError {}
