use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use saltstretch::{DEFAULT_EXPONENT, PasswordHasher, Settings};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod auth;

#[derive(Debug, Parser)]
#[command(name = "saltstretch")]
#[command(
    version,
    about = "Salted, iterated SHA-512 password hashes in the legacy $S$ format."
)]
struct Cli {
    /// Iteration exponent for new hashes, clamped to 7..=30
    #[arg(
        long,
        global = true,
        env = "SALTSTRETCH_COST",
        default_value_t = i64::from(DEFAULT_EXPONENT),
        allow_negative_numbers = true
    )]
    cost: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password with a fresh salt
    Hash,

    /// Checks a password against a stored hash
    #[command(arg_required_else_help = true)]
    Verify { hash: String },

    /// Shows the settings encoded in a stored hash
    #[command(arg_required_else_help = true)]
    Inspect {
        hash: String,

        /// Print as JSON
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },

    /// Tells whether a stored hash should be replaced at the configured cost
    #[command(arg_required_else_help = true)]
    NeedsRehash { hash: String },
}

#[derive(Serialize)]
struct Inspection<'a> {
    scheme: &'static str,
    #[serde(flatten)]
    settings: &'a Settings,
    iterations: u64,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SALTSTRETCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Cli::parse();
    let hasher = PasswordHasher::new().with_exponent(args.cost);

    match args.command {
        Commands::Hash => {
            let password = auth::read_new_password_with_confirmation()?;
            let hash = hasher.hash(&password).context("failed to hash password")?;
            println!("{hash}");
        }
        Commands::Verify { hash } => {
            let password = auth::read_password()?;
            if hasher.verify(&password, &hash) {
                println!("valid");
            } else {
                println!("invalid");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Inspect { hash, json } => {
            let settings = Settings::decode(&hash).context("not a stored hash")?;
            let report = Inspection {
                scheme: settings.scheme().map_or("unknown", |s| s.name()),
                settings: &settings,
                iterations: settings.iterations(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Scheme:     {} (${}$)", report.scheme, settings.tag());
                println!("Exponent:   {}", settings.cost().exponent());
                println!("Iterations: {}", report.iterations);
                println!("Salt:       {}", settings.salt());
            }
        }
        Commands::NeedsRehash { hash } => {
            if hasher.needs_rehash(&hash) {
                println!("yes");
            } else {
                println!("no");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
