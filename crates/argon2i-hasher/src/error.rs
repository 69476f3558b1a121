//! Error types for the Argon2i hasher.
//!
//! KDF failures carry the primitive's own message verbatim together with
//! the status code the reference Argon2 library assigns to the same
//! condition. Input bytes never appear in error messages.

/// Reference library status: success.
pub const ARGON2_OK: i32 = 0;
/// Output length below the primitive's minimum.
pub const ARGON2_OUTPUT_TOO_SHORT: i32 = -2;
/// Output length above the primitive's maximum.
pub const ARGON2_OUTPUT_TOO_LONG: i32 = -3;
/// Password shorter than the primitive accepts.
pub const ARGON2_PWD_TOO_SHORT: i32 = -4;
/// Password longer than the primitive accepts.
pub const ARGON2_PWD_TOO_LONG: i32 = -5;
/// Salt shorter than the primitive's minimum.
pub const ARGON2_SALT_TOO_SHORT: i32 = -6;
/// Salt longer than the primitive accepts.
pub const ARGON2_SALT_TOO_LONG: i32 = -7;
/// Associated data shorter than the primitive accepts.
pub const ARGON2_AD_TOO_SHORT: i32 = -8;
/// Associated data longer than the primitive accepts.
pub const ARGON2_AD_TOO_LONG: i32 = -9;
/// Secret shorter than the primitive accepts.
pub const ARGON2_SECRET_TOO_SHORT: i32 = -10;
/// Secret longer than the primitive accepts.
pub const ARGON2_SECRET_TOO_LONG: i32 = -11;
/// Time cost below 1.
pub const ARGON2_TIME_TOO_SMALL: i32 = -12;
/// Time cost above the primitive's maximum.
pub const ARGON2_TIME_TOO_LARGE: i32 = -13;
/// Memory cost below `8 × parallelism` KiB.
pub const ARGON2_MEMORY_TOO_LITTLE: i32 = -14;
/// Memory cost above the primitive's maximum.
pub const ARGON2_MEMORY_TOO_MUCH: i32 = -15;
/// Parallelism below 1.
pub const ARGON2_LANES_TOO_FEW: i32 = -16;
/// Parallelism above the primitive's maximum.
pub const ARGON2_LANES_TOO_MANY: i32 = -17;
/// Any other parameter the primitive refused.
pub const ARGON2_INCORRECT_PARAMETER: i32 = -25;
/// Unknown Argon2 variant.
pub const ARGON2_INCORRECT_TYPE: i32 = -26;
/// Encoded hash could not be decoded.
pub const ARGON2_DECODING_FAIL: i32 = -32;

/// Hasher error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("Hasher is not ready")]
    NotReady,

    #[error("Invalid output length: {0}")]
    InvalidOutputLength(usize),

    #[error("Argon2i failed ({code}): {message}")]
    Kdf { code: i32, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HashError {
    /// Status code in the reference library's numbering.
    ///
    /// Only KDF failures carry a primitive status; every other variant
    /// reports `None`.
    pub fn status_code(&self) -> Option<i32> {
        match self {
            HashError::Kdf { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<argon2::Error> for HashError {
    fn from(err: argon2::Error) -> Self {
        HashError::Kdf {
            code: status_code(&err),
            message: err.to_string(),
        }
    }
}

/// Map a primitive error onto the reference library's status code.
pub fn status_code(err: &argon2::Error) -> i32 {
    use argon2::Error;

    match err {
        Error::OutputTooShort => ARGON2_OUTPUT_TOO_SHORT,
        Error::OutputTooLong => ARGON2_OUTPUT_TOO_LONG,
        Error::PwdTooShort => ARGON2_PWD_TOO_SHORT,
        Error::PwdTooLong => ARGON2_PWD_TOO_LONG,
        Error::SaltTooShort => ARGON2_SALT_TOO_SHORT,
        Error::SaltTooLong => ARGON2_SALT_TOO_LONG,
        Error::AdTooShort => ARGON2_AD_TOO_SHORT,
        Error::AdTooLong => ARGON2_AD_TOO_LONG,
        Error::SecretTooShort => ARGON2_SECRET_TOO_SHORT,
        Error::SecretTooLong => ARGON2_SECRET_TOO_LONG,
        Error::TimeTooSmall => ARGON2_TIME_TOO_SMALL,
        Error::TimeTooLarge => ARGON2_TIME_TOO_LARGE,
        Error::MemoryTooLittle => ARGON2_MEMORY_TOO_LITTLE,
        Error::MemoryTooMuch => ARGON2_MEMORY_TOO_MUCH,
        Error::LanesTooFew => ARGON2_LANES_TOO_FEW,
        Error::LanesTooMany => ARGON2_LANES_TOO_MANY,
        Error::IncorrectType => ARGON2_INCORRECT_TYPE,
        Error::DecodingFail => ARGON2_DECODING_FAIL,
        _ => ARGON2_INCORRECT_PARAMETER,
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, HashError>;
