use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use time::format_description::well_known::Rfc3339;
use trapframe_core::{DecodeResult, UplinkInput, decode_uplink};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("TRAPFRAME_BUILD_COMMIT"),
    ", ",
    env!("TRAPFRAME_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "trapframe")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for trap sensor LoRaWAN uplink frames (11-byte payload).",
    long_about = None,
    after_help = "Examples:\n  trapframe uplink decode 000000010200645F5E1000 --stdout\n  trapframe uplink decode --file frame.bin -o decoded.json\n  trapframe uplink decode 0x000000010200645F5E1000 --stdout --summary"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on device uplink payloads.
    Uplink {
        #[command(subcommand)]
        command: UplinkCommands,
    },
}

#[derive(Subcommand, Debug)]
enum UplinkCommands {
    /// Decode one uplink frame and emit the network-server JSON envelope.
    Decode {
        /// Frame bytes as a hex string (optional 0x prefix; spaces and colons allowed)
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        payload: Option<String>,

        /// Read raw frame bytes from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output envelope path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        out: Option<PathBuf>,

        /// Write the JSON envelope to stdout
        #[arg(long, conflicts_with = "out")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Print a human-readable field summary to stderr
        #[arg(long)]
        summary: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Uplink { command } => match command {
            UplinkCommands::Decode {
                payload,
                file,
                out,
                stdout,
                pretty,
                compact,
                summary,
                quiet,
            } => cmd_uplink_decode(payload, file, out, stdout, pretty, compact, summary, quiet),
        },
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

fn cmd_uplink_decode(
    payload: Option<String>,
    file: Option<PathBuf>,
    out: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    summary: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let bytes = read_payload_bytes(payload, file)?;

    let input = UplinkInput { bytes };
    let result = decode_uplink(&input).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some(format!(
                "trap uplink frames carry at least {} bytes",
                trapframe_core::FRAME_LEN
            )),
        )
    })?;
    let json = serialize_envelope(&result, pretty, compact)?;

    if stdout {
        print!("{}", json);
        if summary && !quiet {
            print_summary(&result);
        }
        return Ok(());
    }

    let out = out.expect("output path required when not using stdout");
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&out, json)
        .with_context(|| format!("Failed to write envelope: {}", out.display()))?;

    if summary && !quiet {
        print_summary(&result);
    }
    if !quiet {
        eprintln!("OK: envelope written -> {}", out.display());
    }
    Ok(())
}

fn read_payload_bytes(
    payload: Option<String>,
    file: Option<PathBuf>,
) -> Result<Vec<u8>, CliError> {
    if let Some(path) = file {
        if !path.exists() {
            return Err(CliError::new(
                format!("payload file not found: {}", path.display()),
                Some("pass a file containing the raw frame bytes".to_string()),
            ));
        }
        return fs::read(&path)
            .with_context(|| format!("Failed to read payload file: {}", path.display()))
            .map_err(Into::into);
    }

    let payload = payload.expect("payload required when --file is absent");
    parse_hex_payload(&payload)
}

fn parse_hex_payload(payload: &str) -> Result<Vec<u8>, CliError> {
    let cleaned: String = payload
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != ':')
        .collect();

    if cleaned.is_empty() {
        return Err(CliError::new(
            "empty payload",
            Some("pass the frame bytes as a hex string, e.g. 00000001020064".to_string()),
        ));
    }
    if let Some(bad) = cleaned.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(CliError::new(
            format!("invalid hex character '{}'", bad),
            Some("payload must contain hex digits only (0-9, a-f)".to_string()),
        ));
    }
    if cleaned.len() % 2 != 0 {
        return Err(CliError::new(
            format!("odd number of hex digits ({})", cleaned.len()),
            Some("each frame byte needs two hex digits".to_string()),
        ));
    }

    // All chars are ASCII hex digits, so two-byte slicing stays on char
    // boundaries.
    let mut bytes = Vec::with_capacity(cleaned.len() / 2);
    for i in (0..cleaned.len()).step_by(2) {
        let pair = &cleaned[i..i + 2];
        let byte = u8::from_str_radix(pair, 16).map_err(|_| {
            CliError::new(
                format!("invalid hex byte '{}'", pair),
                Some("payload must contain hex digits only (0-9, a-f)".to_string()),
            )
        })?;
        bytes.push(byte);
    }
    Ok(bytes)
}

fn serialize_envelope(
    result: &DecodeResult,
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
        serde_json::to_string_pretty(result)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(result)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn print_summary(result: &DecodeResult) {
    let record = &result.data.data;
    let time = record
        .timestamp()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| "unrepresentable".to_string());

    eprintln!("Decoded uplink:");
    eprintln!("  id                : {}", record.id);
    eprintln!("  version           : {}", record.version);
    eprintln!("  door status       : {}", record.door_status);
    eprintln!("  catch detect      : {}", record.catch_detect);
    eprintln!("  trap displacement : {}", record.trap_displacement);
    eprintln!("  battery status    : {}", record.battery_status);
    eprintln!("  unix time         : {} ({})", record.unix_time, time);
}
