//! Argon2i hasher CLI — `a2i` command.
//!
//! Hashes passwords with configurable Argon2i costs and prints the
//! resulting hex digest, or shows the effective cost parameters.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use argon2i_hasher::{generate_salt, HashConfig, HashInput, Hasher};

// ── Input helpers ─────────────────────────────────────────────────────────────

fn read_password(prompt: &str) -> Result<String> {
    eprint!("{prompt}");
    let mut password = String::new();
    std::io::stdin()
        .read_line(&mut password)
        .context("failed to read password")?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Argon2i hasher CLI — derive hex digests from passwords.
#[derive(Parser, Debug)]
#[command(
    name = "a2i",
    about = "Argon2i hasher CLI",
    version,
    long_about = "a2i — Argon2i hasher CLI\n\nDerive fixed-length hex digests from passwords with tunable\ntime cost, memory cost and parallelism."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Cost parameters: defaults, then a config file, then explicit flags.
#[derive(Args, Debug)]
struct CostArgs {
    /// JSON file with t_cost, m_cost and parallelism
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of passes over memory
    #[arg(long)]
    t_cost: Option<u32>,

    /// Memory usage in KiB
    #[arg(long)]
    m_cost: Option<u32>,

    /// Number of lanes
    #[arg(long)]
    parallelism: Option<u32>,
}

impl CostArgs {
    fn resolve(&self) -> Result<HashConfig> {
        let mut config = match &self.config {
            Some(path) => HashConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => HashConfig::default(),
        };
        if let Some(t_cost) = self.t_cost {
            config.t_cost = t_cost;
        }
        if let Some(m_cost) = self.m_cost {
            config.m_cost = m_cost;
        }
        if let Some(parallelism) = self.parallelism {
            config.parallelism = parallelism;
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash a password
    Hash {
        /// Password to hash. Visible in the process list and shell history;
        /// omit it to be prompted on stdin instead
        #[arg(long)]
        password: Option<String>,

        /// Salt; zero bytes of the output length are used when omitted
        #[arg(long, conflicts_with = "random_salt")]
        salt: Option<String>,

        /// Generate a random 16-byte salt and print it
        #[arg(long)]
        random_salt: bool,

        /// Secret (pepper) mixed into the digest
        #[arg(long)]
        secret: Option<String>,

        /// Associated data bound into the digest
        #[arg(long = "ad")]
        associated_data: Option<String>,

        /// Digest length in bytes
        #[arg(long, default_value_t = 32)]
        length: usize,

        #[command(flatten)]
        costs: CostArgs,

        /// Print a JSON report instead of the bare digest
        #[arg(long)]
        json: bool,
    },

    /// Show the effective cost parameters
    Params {
        #[command(flatten)]
        costs: CostArgs,
    },
}

#[derive(Serialize)]
struct HashReport {
    digest: String,
    salt: Option<String>,
    output_len: usize,
    params: HashConfig,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Hash {
            password,
            salt,
            random_salt,
            secret,
            associated_data,
            length,
            costs,
            json,
        } => cmd_hash(
            password,
            salt,
            random_salt,
            secret.as_deref(),
            associated_data.as_deref(),
            length,
            &costs,
            json,
        ),
        Commands::Params { costs } => cmd_params(&costs),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn cmd_hash(
    password: Option<String>,
    salt: Option<String>,
    random_salt: bool,
    secret: Option<&str>,
    associated_data: Option<&str>,
    length: usize,
    costs: &CostArgs,
    json: bool,
) -> Result<()> {
    let config = costs.resolve()?;
    let mut hasher = Hasher::try_new(length, config).context("invalid digest length")?;

    let password = match password {
        Some(password) => password,
        None => read_password("Password: ")?,
    };

    let salt: Option<Vec<u8>> = if random_salt {
        Some(generate_salt().to_vec())
    } else {
        salt.map(String::into_bytes)
    };

    let mut input = HashInput::new(password.as_bytes());
    if let Some(salt) = &salt {
        input = input.salt(salt);
    }
    if let Some(secret) = secret {
        input = input.secret(secret.as_bytes());
    }
    if let Some(data) = associated_data {
        input = input.associated_data(data.as_bytes());
    }

    let digest = hasher
        .hash_input(&input)
        .map_err(|e| anyhow!("hashing failed: {e}"))?;

    if json {
        let report = HashReport {
            digest,
            salt: salt.as_ref().map(hex::encode),
            output_len: hasher.output_len(),
            params: *hasher.config(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if random_salt {
            if let Some(salt) = &salt {
                eprintln!("salt: {}", hex::encode(salt));
            }
        }
        println!("{digest}");
    }

    Ok(())
}

fn cmd_params(costs: &CostArgs) -> Result<()> {
    let config = costs.resolve()?;
    println!("{}", config.to_json()?);
    Ok(())
}
