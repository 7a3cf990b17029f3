//! seqderive CLI
//!
//! Command-line interface for deriving gene and transcript sequences from a
//! reference genome data directory.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use seqderive::cli::{render_gene, render_metadata, render_transcript, OutputFormat};
use seqderive::{DeriveError, Genome};

#[derive(Parser)]
#[command(name = "seqderive")]
#[command(version, about = "Derive transcript sequences from reference genome annotation data")]
#[command(
    long_about = "Derive gene and transcript sequences from a reference genome data directory.

Examples:
  seqderive --genome toy gene AKT1
  seqderive --genome toy transcript AKT1 NM_001014431.2
  seqderive --genome toy fasta AKT1 NM_001014431.2 -o akt1.fa"
)]
struct Cli {
    /// Root directory holding one subdirectory per genome
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Genome name (subdirectory of the data directory)
    #[arg(long)]
    genome: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a gene's summary, including its genomic sequence
    Gene {
        /// Gene symbol
        symbol: String,
    },

    /// List metadata for every transcript of a gene
    Transcripts {
        /// Gene symbol
        symbol: String,
    },

    /// Show a transcript's summary with all derived sequence levels
    Transcript {
        /// Gene symbol
        symbol: String,
        /// NCBI transcript accession
        accession: String,
    },

    /// Export a transcript's derived sequences as FASTA
    Fasta {
        /// Gene symbol
        symbol: String,
        /// NCBI transcript accession
        accession: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) if err.is_not_found() => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, DeriveError> {
    let genome = Genome::load(&cli.data_dir, &cli.genome)?;

    match &cli.command {
        Commands::Gene { symbol } => {
            let Some(gene) = genome.gene_by_symbol(symbol)? else {
                return not_found(&format!("gene not found: {symbol}"));
            };
            println!("{}", render_gene(&gene.summary()?, cli.format)?.trim_end());
        }
        Commands::Transcripts { symbol } => {
            let Some(gene) = genome.gene_by_symbol(symbol)? else {
                return not_found(&format!("gene not found: {symbol}"));
            };
            println!("{}", render_metadata(&gene.transcripts_metadata()?, cli.format)?.trim_end());
        }
        Commands::Transcript { symbol, accession } => {
            let Some(gene) = genome.gene_by_symbol(symbol)? else {
                return not_found(&format!("gene not found: {symbol}"));
            };
            let Some(transcript) = gene.transcript_by_accession(accession)? else {
                return not_found(&format!("transcript not found: {accession}"));
            };
            println!("{}", render_transcript(&transcript.summary()?, cli.format)?.trim_end());
        }
        Commands::Fasta {
            symbol,
            accession,
            output,
        } => {
            let Some(gene) = genome.gene_by_symbol(symbol)? else {
                return not_found(&format!("gene not found: {symbol}"));
            };
            let Some(transcript) = gene.transcript_by_accession(accession)? else {
                return not_found(&format!("transcript not found: {accession}"));
            };
            match output {
                Some(path) => {
                    let mut file = File::create(path)
                        .map_err(|err| DeriveError::io(format!("creating {}", path.display()), &err))?;
                    transcript.write_fasta(&mut file)?;
                }
                None => {
                    transcript.write_fasta(&mut io::stdout().lock())?;
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn not_found(msg: &str) -> Result<ExitCode, DeriveError> {
    eprintln!("{msg}");
    Ok(ExitCode::from(2))
}
