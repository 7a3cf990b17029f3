//! Strand-aware splicing with coordinate reindexing
//!
//! The splicer extracts exon or CDS regions from a full transcript window and
//! concatenates them in 5′→3′ reading order. The window it receives is
//! already corrected to reading order for the transcript's strand, but the
//! bound pairs are always absolute plus-strand genomic coordinates. Indexing
//! a strand-corrected sequence with plus-strand coordinates therefore takes a
//! double reversal on the minus strand:
//!
//! 1. reverse-complement the window back to genomic orientation,
//! 2. slice the bounds in ascending genomic order,
//! 3. reverse-complement the concatenation so it reads 5′→3′ again.
//!
//! Omitting either reversal, or sorting bounds by anything other than the
//! absolute genomic start, silently corrupts every minus-strand feature.
//! Likewise the `+1` converting the inclusive end bound into an exclusive
//! slice bound is a fixed part of the contract, not a tunable.

use crate::coords::Bound;
use crate::error::DeriveError;
use crate::seq::{reverse_complement, Alphabet};

/// Splice regions out of a strand-corrected RNA window
///
/// `bounds` are absolute 1-based inclusive genomic coordinate pairs;
/// `reindex_origin` is the absolute coordinate of the window's first base
/// (genomic orientation); `reverse` is true for minus-strand transcripts.
/// Bounds are sorted ascending by start before slicing (stable, so source
/// order is kept on equal starts).
///
/// # Errors
///
/// Returns [`DeriveError::InvalidCoordinates`] when a bound falls before the
/// reindex origin or past the end of the window, and
/// [`DeriveError::InvalidBase`] if a reversal meets a character outside the
/// RNA alphabet.
pub fn splice(
    full_sequence: &str,
    bounds: &[Bound],
    reindex_origin: u64,
    reverse: bool,
) -> Result<String, DeriveError> {
    let mut ordered: Vec<Bound> = bounds.to_vec();
    ordered.sort_by_key(|&(start, _)| start);

    // Un-correct the window so plus-strand coordinates index into it
    let window = if reverse {
        reverse_complement(full_sequence, Alphabet::Rna)?
    } else {
        full_sequence.to_string()
    };

    let mut spliced = String::new();
    for &(start, end) in &ordered {
        if start < reindex_origin || end < start {
            return Err(DeriveError::InvalidCoordinates {
                msg: format!("bound ({start}, {end}) precedes reindex origin {reindex_origin}"),
            });
        }
        // Inclusive genomic coordinates to a half-open window-relative slice
        let from = (start - reindex_origin) as usize;
        let to = (end - reindex_origin + 1) as usize;
        let slice = window
            .get(from..to)
            .ok_or_else(|| DeriveError::InvalidCoordinates {
                msg: format!(
                    "bound ({start}, {end}) exceeds window of {} bases at origin {reindex_origin}",
                    window.len()
                ),
            })?;
        spliced.push_str(slice);
    }

    // Re-correct so the result reads 5'->3' for the strand
    if reverse {
        spliced = reverse_complement(&spliced, Alphabet::Rna)?;
    }
    Ok(spliced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_forward() {
        // Window covers genomic 100-109; bounds slice [2,5) and [7,9)
        let spliced = splice("ACGUACGUAC", &[(102, 104), (107, 108)], 100, false).unwrap();
        assert_eq!(spliced, "GUAUA");
    }

    #[test]
    fn test_splice_sorts_bounds_by_genomic_start() {
        let spliced = splice("ACGUACGUAC", &[(107, 108), (102, 104)], 100, false).unwrap();
        assert_eq!(spliced, "GUAUA");
    }

    #[test]
    fn test_splice_reverse_double_reversal() {
        // A minus-strand window is the reverse complement of the genomic
        // sequence; splicing it must equal the reverse complement of the
        // naive plus-strand splice over the same bounds.
        let genomic = "ACGUACGUAC";
        let window = reverse_complement(genomic, Alphabet::Rna).unwrap();
        let bounds = [(102, 104), (107, 108)];

        let forward = splice(genomic, &bounds, 100, false).unwrap();
        let reverse = splice(&window, &bounds, 100, true).unwrap();
        assert_eq!(
            reverse,
            reverse_complement(&forward, Alphabet::Rna).unwrap()
        );
    }

    #[test]
    fn test_splice_single_bound_covering_window() {
        let spliced = splice("ACGUACGUAC", &[(100, 109)], 100, false).unwrap();
        assert_eq!(spliced, "ACGUACGUAC");

        // On the reverse strand the two reversals cancel for a full-window bound
        let window = reverse_complement("ACGUACGUAC", Alphabet::Rna).unwrap();
        let spliced = splice(&window, &[(100, 109)], 100, true).unwrap();
        assert_eq!(spliced, window);
    }

    #[test]
    fn test_splice_empty_bounds() {
        assert_eq!(splice("ACGU", &[], 100, false).unwrap(), "");
    }

    #[test]
    fn test_splice_bound_outside_window() {
        let err = splice("ACGU", &[(100, 110)], 100, false).unwrap_err();
        assert!(matches!(err, DeriveError::InvalidCoordinates { .. }));

        let err = splice("ACGU", &[(90, 95)], 100, false).unwrap_err();
        assert!(matches!(err, DeriveError::InvalidCoordinates { .. }));
    }

    #[test]
    fn test_splice_end_bound_is_inclusive() {
        // (100, 100) is a single base, not an empty slice
        assert_eq!(splice("ACGU", &[(100, 100)], 100, false).unwrap(), "A");
        assert_eq!(splice("ACGU", &[(103, 103)], 100, false).unwrap(), "U");
    }
}
