//! Command definitions and dispatch.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ladle_id::{IdGenerator, Kind};

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "ladle", version, about = "Mint and inspect ladle IDs")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mint new IDs
    New {
        /// Entity kind, by registry name or prefix (omitted with --bare)
        kind: Option<String>,

        /// Number of IDs to mint
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Mint bare IDs: no prefix, no timestamp
        #[arg(long)]
        bare: bool,

        /// Maximum length of a bare ID
        #[arg(long, default_value_t = 27, requires = "bare")]
        length: usize,
    },

    /// Decode an ID and print its parts
    Inspect {
        /// The ID string to decode
        id: String,
    },

    /// List the entity kind registry
    Kinds,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::New {
                kind,
                count,
                bare,
                length,
            } => cmd_new(kind.as_deref(), count, bare, length),
            Command::Inspect { id } => cmd_inspect(&id),
            Command::Kinds => cmd_kinds(),
        }
    }
}

fn cmd_new(kind: Option<&str>, count: usize, bare: bool, length: usize) -> Result<()> {
    let mut generator = IdGenerator::new();

    if bare {
        for _ in 0..count {
            println!("{}", generator.unprefixed(length));
        }
        return Ok(());
    }

    let Some(kind) = kind else {
        bail!("expected an entity kind (run 'ladle kinds'), or pass --bare");
    };
    let kind: Kind = kind
        .parse()
        .with_context(|| format!("unknown kind '{kind}' (run 'ladle kinds')"))?;

    for _ in 0..count {
        println!("{}", generator.prefixed(kind));
    }
    Ok(())
}

fn cmd_inspect(id: &str) -> Result<()> {
    let parsed = ladle_id::parse(id).with_context(|| format!("cannot parse '{id}'"))?;

    println!("kind:    {}", parsed.kind.name());
    println!("prefix:  {}", parsed.kind.prefix());
    println!("payload: {}", hex::encode(parsed.raw.as_bytes()));
    println!("offset:  {} ms", parsed.raw.timestamp_offset_ms());
    println!("minted:  {}", parsed.timestamp().to_rfc3339());
    Ok(())
}

fn cmd_kinds() -> Result<()> {
    println!("{:<18} PREFIX", "NAME");
    for kind in Kind::ALL {
        println!("{:<18} {}", kind.name(), kind.prefix());
    }
    Ok(())
}
