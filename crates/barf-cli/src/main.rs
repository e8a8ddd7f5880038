use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use barf_core::{Command as RegistryCommand, LedMode, Method, Mismatch, RegistrySnapshot};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("BARF_BUILD_COMMIT"),
    ", ",
    env!("BARF_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "barf")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Protocol tag registry tooling for the barf serial/WiFi configuration bridge.",
    long_about = None,
    after_help = "Examples:\n  barf registry dump -o registry.json\n  barf registry check registry.json\n  barf lookup command path_fragment"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on the shared protocol tag registry.
    Registry {
        #[command(subcommand)]
        command: RegistryCommands,
    },
    /// Resolve a logical name to its wire value.
    Lookup {
        #[command(subcommand)]
        command: LookupCommands,
    },
}

#[derive(Subcommand, Debug)]
enum RegistryCommands {
    /// Dump the canonical registry as a versioned JSON snapshot.
    #[command(
        after_help = "Examples:\n  barf registry dump -o registry.json\n  barf registry dump --stdout --pretty"
    )]
    Dump {
        /// Output snapshot path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write the JSON snapshot to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Verify a previously dumped snapshot against this build's registry.
    #[command(
        after_help = "Examples:\n  barf registry check registry.json\n  barf registry check firmware-registry.json --list-mismatches"
    )]
    Check {
        /// Path to a snapshot produced by `registry dump` (or a bare snapshot)
        snapshot: PathBuf,

        /// List individual mismatches on drift
        #[arg(long)]
        list_mismatches: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Subcommand, Debug)]
enum LookupCommands {
    /// Print the wire code for a method name (get, post)
    Method { name: String },
    /// Print the wire code for a LED mode name (activity, connection, off, on, gpio)
    LedMode { name: String },
    /// Print the wire tag for a logical command name
    Command { name: String },
}

/// Snapshot plus dump metadata, mirroring what `registry dump` writes.
#[derive(Debug, Serialize, Deserialize)]
struct DumpEnvelope {
    tool: ToolInfo,
    generated_at: String,
    registry: RegistrySnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
struct ToolInfo {
    name: String,
    version: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Registry { command } => match command {
            RegistryCommands::Dump {
                output,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_registry_dump(output, stdout, pretty, compact, quiet),
            RegistryCommands::Check {
                snapshot,
                list_mismatches,
                quiet,
            } => cmd_registry_check(snapshot, list_mismatches, quiet),
        },
        Commands::Lookup { command } => cmd_lookup(command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_registry_dump(
    output: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let envelope = DumpEnvelope {
        tool: ToolInfo {
            name: "barf".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: now_rfc3339(),
        registry: RegistrySnapshot::current(),
    };
    let json = serialize_envelope(&envelope, pretty, compact)?;

    if stdout {
        print!("{}", json);
        return Ok(());
    }

    let output = output.ok_or_else(|| {
        CliError::new(
            "missing output path",
            Some("use -o/--output or --stdout".to_string()),
        )
    })?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&output, json)
        .with_context(|| format!("Failed to write snapshot: {}", output.display()))?;

    if !quiet {
        eprintln!("OK: snapshot written -> {}", output.display());
    }
    Ok(())
}

fn cmd_registry_check(
    snapshot: PathBuf,
    list_mismatches: bool,
    quiet: bool,
) -> Result<(), CliError> {
    if !snapshot.exists() {
        return Err(CliError::new(
            format!("snapshot file not found: {}", snapshot.display()),
            Some("use a file produced by `barf registry dump`".to_string()),
        ));
    }

    let text = fs::read_to_string(&snapshot)
        .with_context(|| format!("Failed to read snapshot: {}", snapshot.display()))?;
    let loaded = parse_snapshot(&text).map_err(|err| {
        CliError::new(
            format!("invalid snapshot '{}': {}", snapshot.display(), err),
            Some("expected JSON produced by `barf registry dump`".to_string()),
        )
    })?;

    let canonical = RegistrySnapshot::current();
    let mismatches = canonical.diff(&loaded);
    if mismatches.is_empty() {
        if !quiet {
            eprintln!("OK: snapshot matches registry -> {}", snapshot.display());
        }
        return Ok(());
    }

    if list_mismatches && !quiet {
        print_mismatches(&mismatches);
    }
    Err(CliError::new(
        format!("registry drift detected ({} mismatches)", mismatches.len()),
        Some("use --list-mismatches to inspect".to_string()),
    ))
}

fn cmd_lookup(command: LookupCommands) -> Result<(), CliError> {
    match command {
        LookupCommands::Method { name } => {
            let method = Method::from_name(&name)
                .map_err(|err| CliError::new(err.to_string(), Some(known_methods_hint())))?;
            println!("{}", method.code());
        }
        LookupCommands::LedMode { name } => {
            let mode = LedMode::from_name(&name)
                .map_err(|err| CliError::new(err.to_string(), Some(known_led_modes_hint())))?;
            println!("{}", mode.code());
        }
        LookupCommands::Command { name } => {
            let command = RegistryCommand::from_name(&name).map_err(|err| {
                CliError::new(
                    err.to_string(),
                    Some("run `barf registry dump --stdout` to list known commands".to_string()),
                )
            })?;
            println!("{}", command.tag());
        }
    }
    Ok(())
}

fn serialize_envelope(
    envelope: &DumpEnvelope,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(envelope)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(envelope)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

// Accept both the dump envelope and a bare snapshot, so a peer build can
// commit whichever form its tooling produces.
fn parse_snapshot(text: &str) -> Result<RegistrySnapshot, serde_json::Error> {
    match serde_json::from_str::<DumpEnvelope>(text) {
        Ok(envelope) => Ok(envelope.registry),
        Err(_) => serde_json::from_str::<RegistrySnapshot>(text),
    }
}

fn print_mismatches(mismatches: &[Mismatch]) {
    eprintln!("Registry mismatches:");
    let mut sorted: Vec<&Mismatch> = mismatches.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.message.cmp(&b.message)));
    for mismatch in sorted {
        eprintln!("  {} {}", mismatch.id, mismatch.message);
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

fn known_methods_hint() -> String {
    format!(
        "known methods: {}",
        Method::ALL
            .iter()
            .map(|method| method.name())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

fn known_led_modes_hint() -> String {
    format!(
        "known LED modes: {}",
        LedMode::ALL
            .iter()
            .map(|mode| mode.name())
            .collect::<Vec<_>>()
            .join(", ")
    )
}
