//! The Argon2i hasher.
//!
//! A [`Hasher`] owns a fixed-size output buffer and an immutable
//! [`HashConfig`]. Every hash call borrows it mutably, builds a fresh
//! computation context, runs Argon2i over the buffer in place and returns
//! the result hex-encoded. A hasher is reusable but serves one call at a
//! time; use one hasher per concurrent caller.

use std::fmt;

use zeroize::Zeroize;

use crate::config::HashConfig;
use crate::context::KdfContext;
use crate::error::{HashError, Result};
use crate::sink::{ErrorSink, LogSink};

/// Inputs for one hash invocation.
///
/// Only the password is required. An absent or empty salt is replaced by
/// zero bytes of the hasher's output length; an absent or empty secret or
/// associated data is passed to the KDF as zero-length input.
#[derive(Clone, Copy)]
pub struct HashInput<'a> {
    password: &'a [u8],
    salt: Option<&'a [u8]>,
    secret: Option<&'a [u8]>,
    associated_data: Option<&'a [u8]>,
}

impl<'a> HashInput<'a> {
    /// Start an input set from a password.
    pub fn new(password: &'a [u8]) -> Self {
        Self {
            password,
            salt: None,
            secret: None,
            associated_data: None,
        }
    }

    /// Set the salt.
    pub fn salt(mut self, salt: &'a [u8]) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Set the secret (pepper).
    pub fn secret(mut self, secret: &'a [u8]) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Set the associated data.
    pub fn associated_data(mut self, data: &'a [u8]) -> Self {
        self.associated_data = Some(data);
        self
    }
}

impl fmt::Debug for HashInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashInput")
            .field("password_len", &self.password.len())
            .field("salt_len", &self.salt.map(<[u8]>::len))
            .field("secret_len", &self.secret.map(<[u8]>::len))
            .field("associated_data_len", &self.associated_data.map(<[u8]>::len))
            .finish()
    }
}

/// Raw digest bytes together with the costs that produced them.
#[derive(Debug, Clone)]
pub struct Digest {
    bytes: Vec<u8>,
    config: HashConfig,
}

impl Digest {
    /// The raw digest.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the digest is empty. A successful hash never is.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Cost parameters used to compute this digest.
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Lowercase hex encoding, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Drop for Digest {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Reusable Argon2i hasher with a fixed output length and fixed costs.
pub struct Hasher {
    output: Vec<u8>,
    config: HashConfig,
    ready: bool,
    sink: Box<dyn ErrorSink>,
}

impl Hasher {
    /// Create a hasher with default costs (t=2, m=64 KiB, p=1).
    pub fn new(output_len: usize) -> Self {
        Self::with_config(output_len, HashConfig::default())
    }

    /// Create a hasher with explicit costs.
    pub fn with_costs(output_len: usize, t_cost: u32, m_cost: u32, parallelism: u32) -> Self {
        Self::with_config(output_len, HashConfig::new(t_cost, m_cost, parallelism))
    }

    /// Create a hasher from a config.
    ///
    /// A zero `output_len` yields a hasher that is never ready.
    pub fn with_config(output_len: usize, config: HashConfig) -> Self {
        Self {
            output: vec![0u8; output_len],
            config,
            ready: output_len > 0,
            sink: Box::new(LogSink),
        }
    }

    /// Like [`Hasher::with_config`], but rejects a zero output length and
    /// lengths beyond the primitive's 32-bit maximum before allocating.
    pub fn try_new(output_len: usize, config: HashConfig) -> Result<Self> {
        if output_len == 0 || u32::try_from(output_len).is_err() {
            return Err(HashError::InvalidOutputLength(output_len));
        }
        Ok(Self::with_config(output_len, config))
    }

    /// Replace the error sink (defaults to [`LogSink`]).
    pub fn with_sink(mut self, sink: impl ErrorSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Requested digest length in bytes.
    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    /// Cost parameters fixed at construction.
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Whether hash calls will reach the primitive.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Hash a password with no salt, secret or associated data.
    pub fn hash(&mut self, password: &[u8]) -> Result<String> {
        self.hash_input(&HashInput::new(password))
    }

    /// Hash a password with a salt.
    pub fn hash_salted(&mut self, password: &[u8], salt: &[u8]) -> Result<String> {
        self.hash_input(&HashInput::new(password).salt(salt))
    }

    /// Hash with every input spelled out.
    pub fn hash_with(
        &mut self,
        password: &[u8],
        salt: Option<&[u8]>,
        secret: Option<&[u8]>,
        associated_data: Option<&[u8]>,
    ) -> Result<String> {
        let input = HashInput {
            password,
            salt,
            secret,
            associated_data,
        };
        self.hash_input(&input)
    }

    /// Hash and return the digest as lowercase hex.
    ///
    /// # Errors
    ///
    /// `HashError::NotReady` if the hasher has no output buffer, or
    /// `HashError::Kdf` if Argon2i rejects the inputs or costs. In the
    /// latter case the primitive's message has already been sent to the
    /// error sink.
    pub fn hash_input(&mut self, input: &HashInput<'_>) -> Result<String> {
        self.compute(input)?;
        Ok(hex::encode(&self.output))
    }

    /// Hash and return the raw digest.
    pub fn digest(&mut self, input: &HashInput<'_>) -> Result<Digest> {
        self.compute(input)?;
        Ok(Digest {
            bytes: self.output.clone(),
            config: self.config,
        })
    }

    fn compute(&mut self, input: &HashInput<'_>) -> Result<()> {
        if !self.ready {
            return Err(HashError::NotReady);
        }

        let zero_salt;
        let salt = match input.salt {
            Some(salt) if !salt.is_empty() => salt,
            _ => {
                zero_salt = vec![0u8; self.output.len()];
                zero_salt.as_slice()
            }
        };

        log::debug!(
            "argon2i: t_cost={} m_cost={} parallelism={} output_len={} salt_len={}",
            self.config.t_cost,
            self.config.m_cost,
            self.config.parallelism,
            self.output.len(),
            salt.len(),
        );

        let context = KdfContext::new(
            &self.config,
            &mut self.output,
            input.password,
            salt,
            input.secret.unwrap_or_default(),
            input.associated_data.unwrap_or_default(),
        );

        if let Err(err) = context.run() {
            self.output.as_mut_slice().zeroize();
            if let HashError::Kdf { message, .. } = &err {
                self.sink.report(message);
            }
            return Err(err);
        }
        Ok(())
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("output_len", &self.output.len())
            .field("config", &self.config)
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}

impl Drop for Hasher {
    fn drop(&mut self) {
        self.output.as_mut_slice().zeroize();
    }
}

/// Hash once with a throwaway default-cost hasher.
pub fn hash_once(output_len: usize, input: &HashInput<'_>) -> Result<String> {
    Hasher::new(output_len).hash_input(input)
}
