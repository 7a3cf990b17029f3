//! Entity model: genome, gene, transcript
//!
//! These types compose the sequence primitives and the splicer into the full
//! derivation chain. Child entities hold borrowed handles to their owners
//! (`Gene` borrows its `Genome`, `Transcript` borrows both), never shared
//! ownership. Every derived sequence is recomputed on each call; caching, if
//! any, belongs to the hosting application.

use serde::{Deserialize, Serialize};

pub mod gene;
pub mod genome;
pub mod summary;
pub mod transcript;

pub use gene::Gene;
pub use genome::Genome;
pub use summary::{GeneSummary, TranscriptMetadata, TranscriptSummary};
pub use transcript::Transcript;

/// A named protein sequence
///
/// Terminal value object with no behavior of its own; the derivation chain
/// ends at [`Transcript::amino_acid_sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protein {
    pub accession: String,
    pub name: String,
    pub sequence: String,
}
