//! seqderive: transcript sequence derivation from reference genome data
//!
//! Derives, from a genome's coordinate annotations and raw chromosome
//! sequence files, the full chain of molecular sequences for a gene's
//! transcripts: genomic window → pre-RNA → spliced exonic sequence → coding
//! sequence → protein.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use seqderive::Genome;
//!
//! # fn main() -> Result<(), seqderive::DeriveError> {
//! let genome = Genome::load(Path::new("data"), "toy")?;
//!
//! if let Some(gene) = genome.gene_by_symbol("AKT1")? {
//!     for accession in gene.curated_mrna_accessions() {
//!         if let Some(transcript) = gene.transcript_by_accession(accession)? {
//!             if let Some(protein) = transcript.amino_acid_sequence()? {
//!                 println!("{accession}: {protein}");
//!             }
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod coords;
pub mod error;
pub mod model;
pub mod record;
pub mod seq;
pub mod splice;
pub mod store;

pub use coords::{Bound, Locus, Strand};
pub use error::DeriveError;
pub use model::{Gene, GeneSummary, Genome, Protein, Transcript, TranscriptMetadata, TranscriptSummary};
pub use seq::{reverse_complement, transcribe, translate, Alphabet};
pub use splice::splice;
pub use store::SequenceStore;
