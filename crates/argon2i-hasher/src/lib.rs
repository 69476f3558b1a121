//! Argon2i hasher — configurable password hashing with hex-encoded digests.
//!
//! Derives a fixed-length digest from a password plus optional salt,
//! secret and associated data under tunable time cost, memory cost and
//! parallelism. Failures are returned as tagged errors and forwarded to a
//! pluggable error sink.
//!
//! ```no_run
//! use argon2i_hasher::Hasher;
//!
//! let mut hasher = Hasher::new(32);
//! let hex = hasher.hash_salted(b"correct-password", b"saltsaltsaltsalt")?;
//! assert_eq!(hex.len(), 64);
//! # Ok::<(), argon2i_hasher::HashError>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod hasher;
pub mod random;
pub mod sink;

// Re-export primary types
pub use config::HashConfig;
pub use error::{HashError, Result};
pub use hasher::{hash_once, Digest, HashInput, Hasher};
pub use random::generate_salt;
pub use sink::{ErrorSink, LogSink, MemorySink};
