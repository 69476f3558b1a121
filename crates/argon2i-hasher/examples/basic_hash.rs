//! Basic hashing: default costs, explicit costs, and a failing call.
//!
//! Run with: cargo run --example basic_hash -p argon2i-hasher

use argon2i_hasher::{generate_salt, HashInput, Hasher, MemorySink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Default costs (t=2, m=64 KiB, p=1) with a fixed salt.
    let mut hasher = Hasher::new(32);
    let hex = hasher.hash_salted(b"correct-password", b"saltsaltsaltsalt")?;
    println!("default: {hex}");

    // 2. Heavier costs, random salt, secret and associated data.
    let salt = generate_salt();
    let mut strong = Hasher::with_costs(32, 3, 4096, 2);
    let digest = strong.digest(
        &HashInput::new(b"correct-password")
            .salt(&salt)
            .secret(b"server-pepper")
            .associated_data(b"v1"),
    )?;
    println!("strong:  {digest}");
    println!("salt:    {}", hex::encode(salt));
    println!("costs:   {:?}", digest.config());

    // 3. A rejected parameter is reported, not panicked on.
    let sink = MemorySink::new();
    let mut broken = Hasher::with_costs(32, 0, 64, 1).with_sink(sink.clone());
    if let Err(e) = broken.hash(b"correct-password") {
        println!("failed:  {e}");
    }
    for message in sink.messages() {
        println!("sink:    {message}");
    }

    Ok(())
}
