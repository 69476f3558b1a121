//! Salt generation.
//!
//! Uses the operating system's cryptographic random source via `rand`.

use rand::RngCore;

/// Length of salts produced by [`generate_salt`].
pub const SALT_LEN: usize = 16;

/// Generate a random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}
