//! Error types for seqderive
//!
//! The taxonomy separates "valid query, nothing there" from hard failures:
//! a missing genome or chromosome sequence is [`DeriveError::GenomeNotFound`]
//! or [`DeriveError::SequenceNotFound`] and callers may treat it as an empty
//! result, while malformed annotation literals and invalid sequence input
//! abort the operation in progress. Missing genes and transcripts are not
//! errors at all: lookups return `Ok(None)` for those.

use thiserror::Error;

use crate::seq::Alphabet;

/// Main error type for seqderive operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// Genome catalog (genes table) not present under the data directory
    #[error("Genome not found: {name}")]
    GenomeNotFound { name: String },

    /// Chromosome file missing, or the requested window lies past its end
    #[error("Sequence not found for {chromosome}:{start}-{end}")]
    SequenceNotFound {
        chromosome: String,
        start: u64,
        end: u64,
    },

    /// An annotation field failed schema validation
    #[error("Malformed record in field '{field}': {msg}")]
    MalformedRecord { field: String, msg: String },

    /// A character outside the alphabet's complement table
    #[error("Invalid base '{base}' for {alphabet} alphabet")]
    InvalidBase { base: char, alphabet: Alphabet },

    /// A triplet not in the genetic code table, or a trailing chunk
    /// shorter than three bases
    #[error("Invalid codon: {codon}")]
    InvalidCodon { codon: String },

    /// Coordinates that cannot address the sequence they were applied to
    #[error("Invalid coordinates: {msg}")]
    InvalidCoordinates { msg: String },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },
}

impl DeriveError {
    /// Create an IO error from a source error and context message
    pub fn io(context: impl Into<String>, err: &std::io::Error) -> Self {
        DeriveError::Io {
            msg: format!("{}: {}", context.into(), err),
        }
    }

    /// Whether this error means "absent data" rather than a hard failure
    ///
    /// Callers serving lookups can map these to an empty result instead of
    /// propagating a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DeriveError::GenomeNotFound { .. } | DeriveError::SequenceNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = DeriveError::GenomeNotFound {
            name: "GRCh38".to_string(),
        };
        assert!(err.is_not_found());

        let err = DeriveError::SequenceNotFound {
            chromosome: "1".to_string(),
            start: 100,
            end: 200,
        };
        assert!(err.is_not_found());

        let err = DeriveError::InvalidCodon {
            codon: "AU".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_display_messages() {
        let err = DeriveError::InvalidBase {
            base: 'N',
            alphabet: Alphabet::Dna,
        };
        assert_eq!(err.to_string(), "Invalid base 'N' for DNA alphabet");

        let err = DeriveError::MalformedRecord {
            field: "locus".to_string(),
            msg: "expected 4 elements".to_string(),
        };
        assert!(err.to_string().contains("locus"));
    }
}
