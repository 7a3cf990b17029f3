//! Sequence primitives: reverse complement, transcription, translation
//!
//! Pure functions over sequence strings; no I/O. All operations are
//! case-preserving where the output is a nucleotide sequence, and
//! case-insensitive where a lookup is performed (codon translation).
//!
//! The complement tables mirror standard base pairing: A↔T for DNA, A↔U for
//! RNA, C↔G in both. In the RNA table `T` still complements to `A`, so a
//! partially transcribed sequence does not trip the validator; `U` is not a
//! member of the DNA table and is rejected there.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DeriveError;

/// Nucleic acid alphabet selecting the complement table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alphabet {
    /// Deoxyribonucleic: A, C, G, T
    Dna,
    /// Ribonucleic: A, C, G, U (T tolerated on input)
    Rna,
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Dna => write!(f, "DNA"),
            Alphabet::Rna => write!(f, "RNA"),
        }
    }
}

/// Complement a single base, preserving case
///
/// Returns `None` for characters outside the alphabet's table.
fn complement(base: char, alphabet: Alphabet) -> Option<char> {
    match alphabet {
        Alphabet::Dna => match base {
            'A' => Some('T'),
            'T' => Some('A'),
            'C' => Some('G'),
            'G' => Some('C'),
            'a' => Some('t'),
            't' => Some('a'),
            'c' => Some('g'),
            'g' => Some('c'),
            _ => None,
        },
        Alphabet::Rna => match base {
            'A' => Some('U'),
            'U' => Some('A'),
            'T' => Some('A'),
            'C' => Some('G'),
            'G' => Some('C'),
            'a' => Some('u'),
            'u' => Some('a'),
            't' => Some('a'),
            'c' => Some('g'),
            'g' => Some('c'),
            _ => None,
        },
    }
}

/// Reverse-complement a DNA or RNA sequence
///
/// Reverses character order and complements each base. Upper and lower case
/// are mapped independently, so case travels with the base.
///
/// # Errors
///
/// Returns [`DeriveError::InvalidBase`] on the first character outside the
/// alphabet's complement table.
pub fn reverse_complement(sequence: &str, alphabet: Alphabet) -> Result<String, DeriveError> {
    let mut out = String::with_capacity(sequence.len());
    for base in sequence.chars().rev() {
        out.push(complement(base, alphabet).ok_or(DeriveError::InvalidBase { base, alphabet })?);
    }
    Ok(out)
}

/// Transcribe a DNA sequence into pre-RNA (no splicing)
///
/// Substitutes `T`/`t` with `U`/`u`; every other character passes through
/// unchanged, so input and output lengths always match.
pub fn transcribe(dna_sequence: &str) -> String {
    dna_sequence
        .chars()
        .map(|base| match base {
            'T' => 'U',
            't' => 'u',
            other => other,
        })
        .collect()
}

/// Translate an RNA coding sequence into a protein sequence
///
/// Consumes the input in non-overlapping triplets, looking each codon up
/// case-insensitively in the standard genetic code. Stop codons translate to
/// `*` and translation continues past them; trimming at the first stop is the
/// caller's business.
///
/// # Errors
///
/// Returns [`DeriveError::InvalidCodon`] if the final chunk is shorter than
/// three bases (input length not a multiple of 3) or a triplet is not one of
/// the 64 known codons.
pub fn translate(coding_sequence: &str) -> Result<String, DeriveError> {
    let bytes = coding_sequence.as_bytes();
    let mut protein = String::with_capacity(bytes.len() / 3);
    for chunk in bytes.chunks(3) {
        if chunk.len() < 3 {
            return Err(DeriveError::InvalidCodon {
                codon: String::from_utf8_lossy(chunk).into_owned(),
            });
        }
        let codon = [
            chunk[0].to_ascii_uppercase(),
            chunk[1].to_ascii_uppercase(),
            chunk[2].to_ascii_uppercase(),
        ];
        let amino_acid = codon_to_amino_acid(&codon).ok_or_else(|| DeriveError::InvalidCodon {
            codon: String::from_utf8_lossy(&codon).into_owned(),
        })?;
        protein.push(amino_acid);
    }
    Ok(protein)
}

/// Standard genetic code: RNA codon to single-letter amino acid, `*` for stop
fn codon_to_amino_acid(codon: &[u8; 3]) -> Option<char> {
    let amino_acid = match codon {
        b"UUU" | b"UUC" => 'F',
        b"UUA" | b"UUG" | b"CUU" | b"CUC" | b"CUA" | b"CUG" => 'L',
        b"UCU" | b"UCC" | b"UCA" | b"UCG" | b"AGU" | b"AGC" => 'S',
        b"UAU" | b"UAC" => 'Y',
        b"UAA" | b"UAG" | b"UGA" => '*',
        b"UGU" | b"UGC" => 'C',
        b"UGG" => 'W',
        b"CCU" | b"CCC" | b"CCA" | b"CCG" => 'P',
        b"CAU" | b"CAC" => 'H',
        b"CAA" | b"CAG" => 'Q',
        b"CGU" | b"CGC" | b"CGA" | b"CGG" | b"AGA" | b"AGG" => 'R',
        b"AUU" | b"AUC" | b"AUA" => 'I',
        b"AUG" => 'M',
        b"ACU" | b"ACC" | b"ACA" | b"ACG" => 'T',
        b"AAU" | b"AAC" => 'N',
        b"AAA" | b"AAG" => 'K',
        b"GUU" | b"GUC" | b"GUA" | b"GUG" => 'V',
        b"GCU" | b"GCC" | b"GCA" | b"GCG" => 'A',
        b"GAU" | b"GAC" => 'D',
        b"GAA" | b"GAG" => 'E',
        b"GGU" | b"GGC" | b"GGA" | b"GGG" => 'G',
        _ => return None,
    };
    Some(amino_acid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement_dna() {
        assert_eq!(
            reverse_complement("ACGT", Alphabet::Dna).unwrap(),
            "ACGT".to_string()
        );
        assert_eq!(reverse_complement("AACG", Alphabet::Dna).unwrap(), "CGTT");
        assert_eq!(reverse_complement("", Alphabet::Dna).unwrap(), "");
    }

    #[test]
    fn test_reverse_complement_rna() {
        assert_eq!(reverse_complement("ACGU", Alphabet::Rna).unwrap(), "ACGU");
        assert_eq!(reverse_complement("AACG", Alphabet::Rna).unwrap(), "CGUU");
        // T complements to A in the RNA table
        assert_eq!(reverse_complement("AT", Alphabet::Rna).unwrap(), "AU");
    }

    #[test]
    fn test_reverse_complement_preserves_case() {
        assert_eq!(reverse_complement("AcGt", Alphabet::Dna).unwrap(), "aCgT");
        assert_eq!(reverse_complement("acgu", Alphabet::Rna).unwrap(), "acgu");
    }

    #[test]
    fn test_reverse_complement_invalid_base() {
        let err = reverse_complement("ACGN", Alphabet::Dna).unwrap_err();
        assert_eq!(
            err,
            DeriveError::InvalidBase {
                base: 'N',
                alphabet: Alphabet::Dna
            }
        );
        // U is not in the DNA table
        assert!(reverse_complement("ACGU", Alphabet::Dna).is_err());
    }

    #[test]
    fn test_reverse_complement_round_trip() {
        let seq = "ATGGCCAAAGGGTTTCCC";
        let round = reverse_complement(&reverse_complement(seq, Alphabet::Dna).unwrap(), Alphabet::Dna)
            .unwrap();
        assert_eq!(round, seq);
    }

    #[test]
    fn test_transcribe() {
        assert_eq!(transcribe("ATGT"), "AUGU");
        assert_eq!(transcribe("atgt"), "augu");
        assert_eq!(transcribe("ACGC"), "ACGC");
        assert_eq!(transcribe(""), "");
    }

    #[test]
    fn test_transcribe_preserves_length_and_non_t() {
        let seq = "ATGCatgcNNTT";
        let rna = transcribe(seq);
        assert_eq!(rna.len(), seq.len());
        for (d, r) in seq.chars().zip(rna.chars()) {
            match d {
                'T' => assert_eq!(r, 'U'),
                't' => assert_eq!(r, 'u'),
                other => assert_eq!(r, other),
            }
        }
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("AUGGCCUAA").unwrap(), "MA*");
        assert_eq!(translate("").unwrap(), "");
        // Case-insensitive lookup
        assert_eq!(translate("auggccuaa").unwrap(), "MA*");
    }

    #[test]
    fn test_translate_continues_past_stop() {
        assert_eq!(translate("UAAGCAUGA").unwrap(), "*A*");
    }

    #[test]
    fn test_translate_partial_codon() {
        let err = translate("AUGG").unwrap_err();
        assert_eq!(
            err,
            DeriveError::InvalidCodon {
                codon: "G".to_string()
            }
        );
        assert!(translate("AU").is_err());
    }

    #[test]
    fn test_translate_unknown_codon() {
        // DNA triplets are not in the RNA codon table
        let err = translate("ATG").unwrap_err();
        assert_eq!(
            err,
            DeriveError::InvalidCodon {
                codon: "ATG".to_string()
            }
        );
        assert!(translate("ANN").is_err());
    }
}
