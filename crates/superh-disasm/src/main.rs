use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Write as _;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use superh_rs::batch::{decode_chunks, split_chunks, BatchConfig, BatchItem, DEFAULT_LIMIT};
use superh_rs::decoder::Decoder;
use superh_rs::disasm::fmt_line;
use superh_rs::{Fpscr, Word};

use superh_disasm::model::{clean_objdump, load_hex_text, load_raw_bin, Endian};

#[derive(Parser, Debug)]
#[command(author, version, about = "SuperH instruction word decoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a single 16-bit word given as a binary string
    Word {
        /// ISA variant, e.g. SuperH4, --SuperH4 or sh4
        #[arg(allow_hyphen_values = true)]
        variant: String,
        /// 16 characters of 0/1, most significant bit first
        bits: String,
        #[command(flatten)]
        mode: ModeArgs,
    },
    /// Decode a stream of 16-bit words from a dump or image
    Batch {
        /// Input path
        #[arg(value_name = "FILE")]
        file: String,
        /// ISA variant
        #[arg(long, default_value = "SuperH4", allow_hyphen_values = true)]
        variant: String,
        /// Only decode this section of an objdump listing (e.g. .text)
        #[arg(long)]
        section: Option<String>,
        /// Maximum number of words to decode
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        number: usize,
        /// How to read FILE
        #[arg(long, value_enum, default_value_t = InputKind::Objdump)]
        input: InputKind,
        /// Byte order of a raw image
        #[arg(long, value_enum, default_value_t = ByteOrder::Big)]
        endian: ByteOrder,
        /// Skip N bytes at the start of a raw image
        #[arg(long, default_value_t = 0usize)]
        skip: usize,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
        #[command(flatten)]
        mode: ModeArgs,
        /// Decode on the current thread only
        #[arg(long)]
        serial: bool,
    },
    /// Show the table self-check for one or all variants
    Tables {
        #[arg(long, allow_hyphen_values = true)]
        variant: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
struct ModeArgs {
    /// Decode with FPSCR.PR set (double precision)
    #[arg(long)]
    fpscr_pr: bool,
    /// Decode with FPSCR.SZ set (pair transfers)
    #[arg(long)]
    fpscr_sz: bool,
}

impl ModeArgs {
    fn fpscr(self) -> Fpscr {
        let mut mode = Fpscr::empty();
        mode.set(Fpscr::PR, self.fpscr_pr);
        mode.set(Fpscr::SZ, self.fpscr_sz);
        mode
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputKind {
    Objdump,
    Hex,
    Raw,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ByteOrder {
    Big,
    Little,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, serde::Serialize)]
struct Record {
    index: usize,
    chunk: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    word: Option<Word>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<BatchItem> for Record {
    fn from(item: BatchItem) -> Self {
        let (word, text, error) = match item.result {
            Ok(d) => (Some(d.word()), Some(d.to_string()), None),
            Err(e) => (None, None, Some(e.to_string())),
        };
        Record { index: item.index, chunk: item.chunk, word, text, error }
    }
}

fn read_lines(
    path: &str,
    kind: InputKind,
    section: Option<&str>,
    skip: usize,
    endian: ByteOrder,
) -> Result<Vec<String>> {
    let endian = match endian {
        ByteOrder::Big => Endian::Big,
        ByteOrder::Little => Endian::Little,
    };
    match kind {
        InputKind::Raw => load_raw_bin(Path::new(path), skip, endian),
        InputKind::Hex | InputKind::Objdump => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            match kind {
                InputKind::Objdump => clean_objdump(&text, section),
                _ => Ok(load_hex_text(&text)),
            }
        }
    }
}

/// Listing lines for decoded words; failures go to stderr and are left out.
fn text_listing(items: &[BatchItem]) -> Result<String> {
    let mut buf = String::new();
    for item in items {
        match &item.result {
            Ok(d) => writeln!(buf, "{}", fmt_line(&item.chunk, d))?,
            Err(e) => eprintln!("Conversion error ({}): {e}", item.chunk),
        }
    }
    Ok(buf)
}

fn json_listing(items: Vec<BatchItem>) -> Result<String> {
    let records: Vec<Record> = items.into_iter().map(Record::from).collect();
    let mut buf = serde_json::to_string_pretty(&records)?;
    buf.push('\n');
    Ok(buf)
}

fn emit(buf: String, out: Option<String>) -> Result<()> {
    match out {
        Some(path) => std::fs::write(&path, buf).with_context(|| format!("writing {path}"))?,
        None => print!("{buf}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = superh_rs::init()?;

    match cli.cmd {
        Command::Word { variant, bits, mode } => {
            let engine = registry.select(&variant)?;
            let decoded = engine.decode_with(Word::parse(&bits)?, mode.fpscr())?;
            println!("Assembly: {decoded}");
        }
        Command::Batch {
            file,
            variant,
            section,
            number,
            input,
            endian,
            skip,
            format,
            out,
            mode,
            serial,
        } => {
            let engine = registry.select(&variant)?;
            let lines = read_lines(&file, input, section.as_deref(), skip, endian)?;
            let chunks: Vec<String> = lines.iter().flat_map(|l| split_chunks(l)).collect();
            let cfg = BatchConfig { limit: Some(number), parallel: !serial, fpscr: mode.fpscr() };
            tracing::debug!(variant = %engine.variant(), chunks = chunks.len(), ?cfg, "batch");

            let items = decode_chunks(engine, &chunks, &cfg);
            let buf = match format {
                OutputFormat::Text => text_listing(&items)?,
                OutputFormat::Json => json_listing(items)?,
            };
            emit(buf, out)?;
        }
        Command::Tables { variant, format } => {
            let reports = match variant {
                Some(v) => vec![registry.select(&v)?.table().report()],
                None => registry.reports(),
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
                OutputFormat::Text => {
                    for r in reports {
                        println!(
                            "{:<11} entries={:<4} overlaps={:<3} partial-maps={}",
                            r.variant,
                            r.entries,
                            r.overlaps.len(),
                            r.partial_maps.len()
                        );
                        for o in &r.overlaps {
                            println!(
                                "  overlap {} ({}) before {} ({})",
                                o.first, o.first_mnemonic, o.second, o.second_mnemonic
                            );
                        }
                        for m in &r.partial_maps {
                            println!(
                                "  ${} via {} has no name for {:?}",
                                m.symbol, m.map, m.missing
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
