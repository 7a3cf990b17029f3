//! Coordinate and orientation types
//!
//! All coordinates in this crate are **1-based inclusive** absolute genomic
//! positions unless a function says otherwise. Bound pairs are `(start, end)`
//! tuples in that convention; the splicer converts them to half-open slice
//! windows internally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeriveError;

/// Strand orientation
///
/// Plus reads left-to-right in genomic coordinate order; minus reads
/// right-to-left and requires reverse-complementing to obtain the biological
/// reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "plus")]
    Plus,
    #[serde(rename = "minus")]
    Minus,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Plus => write!(f, "plus"),
            Strand::Minus => write!(f, "minus"),
        }
    }
}

impl FromStr for Strand {
    type Err = DeriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" => Ok(Strand::Plus),
            "minus" => Ok(Strand::Minus),
            other => Err(DeriveError::MalformedRecord {
                field: "orientation".to_string(),
                msg: format!("expected 'plus' or 'minus', got '{other}'"),
            }),
        }
    }
}

/// A bound pair: 1-based inclusive (start, end) genomic coordinates
pub type Bound = (u64, u64);

/// Where a genomic feature lies: chromosome, orientation, and span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locus {
    /// Chromosome name without the "chr" prefix (e.g. "1", "X")
    pub chromosome: String,
    pub orientation: Strand,
    /// 1-based inclusive absolute start
    pub start: u64,
    /// 1-based inclusive absolute end
    pub end: u64,
}

impl Locus {
    /// Construct a locus, enforcing `start <= end`
    pub fn new(
        chromosome: impl Into<String>,
        orientation: Strand,
        start: u64,
        end: u64,
    ) -> Result<Self, DeriveError> {
        if start > end {
            return Err(DeriveError::MalformedRecord {
                field: "locus".to_string(),
                msg: format!("start {start} exceeds end {end}"),
            });
        }
        Ok(Self {
            chromosome: chromosome.into(),
            orientation,
            start,
            end,
        })
    }

    /// Span length in bases (inclusive of both ends)
    pub fn span(&self) -> u64 {
        self.end - self.start + 1
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.chromosome, self.start, self.end, self.orientation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_parse_and_display() {
        assert_eq!("plus".parse::<Strand>().unwrap(), Strand::Plus);
        assert_eq!("minus".parse::<Strand>().unwrap(), Strand::Minus);
        assert!("forward".parse::<Strand>().is_err());
        assert_eq!(Strand::Minus.to_string(), "minus");
    }

    #[test]
    fn test_locus_invariant() {
        let locus = Locus::new("1", Strand::Plus, 100, 130).unwrap();
        assert_eq!(locus.span(), 31);
        assert!(Locus::new("1", Strand::Plus, 130, 100).is_err());
    }

    #[test]
    fn test_locus_display() {
        let locus = Locus::new("X", Strand::Minus, 5, 9).unwrap();
        assert_eq!(locus.to_string(), "X:5-9 (minus)");
    }
}
