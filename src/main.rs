use clap::{ArgAction, Parser, Subcommand};
use splurge_base58::codec::DEFAULT_MAX_ENCODE_LEN;
use splurge_base58::{Base58, CodecConfig, CodecError};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const CONSTRAINTS: &str = "\
Constraints:
  encode: max input length is 2048 bytes (change with --max-length)
  decode: max input length is 2827 characters (derived from --max-length)";

#[derive(Parser)]
#[command(name = "base58", version, about = "Base-58 (Bitcoin alphabet) encoder and decoder", after_help = CONSTRAINTS)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Maximum encode input length in bytes; the decode limit is derived from it
    #[arg(long, default_value_t = DEFAULT_MAX_ENCODE_LEN, global = true)]
    max_length: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data to a base-58 string
    Encode {
        /// Treat INPUT as hex-encoded bytes instead of UTF-8 text
        #[arg(long)]
        hex: bool,
        input: OsString,
    },
    /// Decode a base-58 string to binary data
    Decode {
        /// Print the decoded bytes as hex even when they are valid UTF-8
        #[arg(long)]
        hex: bool,
        input: OsString,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let codec = Base58::new(CodecConfig::with_max_encode_len(cli.max_length));
    debug!(
        max_encode_len = codec.config().max_encode_len,
        max_decode_len = codec.config().max_decode_len,
        "codec configured"
    );

    match cli.command {
        // ── Encode ───────────────────────────────────────────────────────────
        Commands::Encode { hex: hex_input, input } => {
            let text = utf8_arg(input)?;
            let data = if hex_input { hex::decode(text.trim())? } else { text.into_bytes() };
            info!(bytes = data.len(), "encoding");
            Ok(codec.encode(&data)?)
        }

        // ── Decode ───────────────────────────────────────────────────────────
        Commands::Decode { hex: hex_output, input } => {
            let text = utf8_arg(input)?;
            info!(chars = text.chars().count(), "decoding");
            let data = codec.decode(&text)?;
            Ok(render_decoded(data, hex_output))
        }
    }
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn utf8_arg(arg: OsString) -> Result<String, CodecError> {
    arg.into_string()
        .map_err(|_| CodecError::TypeMismatch { expected: "UTF-8 text" })
}

/// UTF-8 payloads print as text, anything else as lower-case hex.
fn render_decoded(data: Vec<u8>, force_hex: bool) -> String {
    if force_hex {
        return hex::encode(data);
    }
    match String::from_utf8(data) {
        Ok(text) => text,
        Err(e) => {
            info!("decoded payload is not valid UTF-8, printing hex");
            hex::encode(e.into_bytes())
        }
    }
}
