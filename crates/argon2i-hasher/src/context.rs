//! Per-invocation computation context.
//!
//! A [`KdfContext`] gathers everything one Argon2i call needs: borrowed
//! output buffer and inputs, the cost parameters, the lane and thread
//! counts and the fixed version tag. It is built fresh for every hash and
//! consumed by [`KdfContext::run`].

use argon2::{Config, ThreadMode, Variant, Version};

use crate::config::HashConfig;
use crate::error::{HashError, Result, ARGON2_OUTPUT_TOO_LONG};

/// Argon2 version tag used for every invocation.
pub const ARGON2_VERSION: Version = Version::Version13;

/// One-shot argument bundle for a single Argon2i invocation.
pub(crate) struct KdfContext<'a> {
    out: &'a mut [u8],
    password: &'a [u8],
    salt: &'a [u8],
    secret: &'a [u8],
    associated_data: &'a [u8],
    t_cost: u32,
    m_cost: u32,
    lanes: u32,
    threads: u32,
    version: Version,
}

impl<'a> KdfContext<'a> {
    /// Assemble a context. Parallelism fills both the lane and thread slots.
    pub(crate) fn new(
        config: &HashConfig,
        out: &'a mut [u8],
        password: &'a [u8],
        salt: &'a [u8],
        secret: &'a [u8],
        associated_data: &'a [u8],
    ) -> Self {
        Self {
            out,
            password,
            salt,
            secret,
            associated_data,
            t_cost: config.t_cost,
            m_cost: config.m_cost,
            lanes: config.parallelism,
            threads: config.parallelism,
            version: ARGON2_VERSION,
        }
    }

    /// Run Argon2i, writing the digest into the output buffer in place.
    pub(crate) fn run(self) -> Result<()> {
        let hash_length = u32::try_from(self.out.len()).map_err(|_| HashError::Kdf {
            code: ARGON2_OUTPUT_TOO_LONG,
            message: "Output is too long".to_string(),
        })?;

        let config = Config {
            variant: Variant::Argon2i,
            version: self.version,
            hash_length,
            mem_cost: self.m_cost,
            time_cost: self.t_cost,
            lanes: self.lanes,
            thread_mode: ThreadMode::from_threads(self.threads),
            secret: self.secret,
            ad: self.associated_data,
        };

        let mut digest = argon2::hash_raw(self.password, self.salt, &config)?;
        self.out.copy_from_slice(&digest);
        zeroize::Zeroize::zeroize(&mut digest);
        Ok(())
    }
}
