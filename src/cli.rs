//! CLI rendering utilities
//!
//! Pure formatting functions used by the `seqderive` binary, kept in the
//! library so they can be unit tested without end-to-end CLI runs.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::DeriveError;
use crate::model::{GeneSummary, TranscriptMetadata, TranscriptSummary};

/// Output format for summary rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Line-oriented plain text
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, DeriveError> {
    serde_json::to_string_pretty(value).map_err(|err| DeriveError::Io {
        msg: format!("serializing output: {err}"),
    })
}

fn push_optional(lines: &mut String, label: &str, value: Option<&str>) {
    match value {
        Some(sequence) => lines.push_str(&format!("{label}\t{sequence}\n")),
        None => lines.push_str(&format!("{label}\t-\n")),
    }
}

/// Render a gene summary
pub fn render_gene(summary: &GeneSummary, format: OutputFormat) -> Result<String, DeriveError> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Text => {
            let mut lines = String::new();
            lines.push_str(&format!("genome\t{}\n", summary.genome_name));
            lines.push_str(&format!("symbol\t{}\n", summary.symbol));
            lines.push_str(&format!("name\t{}\n", summary.name));
            lines.push_str(&format!("type\t{}\n", summary.gene_type));
            lines.push_str(&format!("locus\t{}\n", summary.locus));
            lines.push_str(&format!("transcripts\t{}\n", summary.transcripts.join(",")));
            lines.push_str(&format!("sequence\t{}\n", summary.sequence));
            Ok(lines)
        }
    }
}

/// Render a transcript summary with all derived sequence levels
pub fn render_transcript(
    summary: &TranscriptSummary,
    format: OutputFormat,
) -> Result<String, DeriveError> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Text => {
            let mut lines = String::new();
            lines.push_str(&format!("accession\t{}\n", summary.ncbi_accession));
            lines.push_str(&format!("gene\t{}\n", summary.gene_symbol));
            lines.push_str(&format!("biotype\t{}\n", summary.biotype));
            lines.push_str(&format!("product\t{}\n", summary.product));
            lines.push_str(&format!("locus\t{}\n", summary.locus));
            lines.push_str(&format!("sequence\t{}\n", summary.sequence));
            push_optional(&mut lines, "exonic_sequence", summary.exonic_sequence.as_deref());
            push_optional(&mut lines, "coding_sequence", summary.coding_sequence.as_deref());
            push_optional(
                &mut lines,
                "amino_acid_sequence",
                summary.amino_acid_sequence.as_deref(),
            );
            Ok(lines)
        }
    }
}

/// Render transcript metadata rows
pub fn render_metadata(
    rows: &[TranscriptMetadata],
    format: OutputFormat,
) -> Result<String, DeriveError> {
    match format {
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Text => {
            let mut lines = String::new();
            for row in rows {
                lines.push_str(&format!(
                    "{}\t{}\t{}\t{}\n",
                    row.ncbi_accession, row.biotype, row.source, row.product
                ));
            }
            Ok(lines)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Locus, Strand};

    fn gene_summary() -> GeneSummary {
        GeneSummary {
            genome_name: "toy".to_string(),
            ncbi_gene_id: "1".to_string(),
            symbol: "ALPHA".to_string(),
            name: "alpha example gene".to_string(),
            gene_type: "protein-coding".to_string(),
            locus: Locus::new("1", Strand::Plus, 11, 40).unwrap(),
            transcripts: vec!["NM_000001.1".to_string()],
            sequence: "ATG".to_string(),
        }
    }

    #[test]
    fn test_render_gene_text() {
        let text = render_gene(&gene_summary(), OutputFormat::Text).unwrap();
        assert!(text.contains("symbol\tALPHA"));
        assert!(text.contains("locus\t1:11-40 (plus)"));
        assert!(text.contains("sequence\tATG"));
    }

    #[test]
    fn test_render_gene_json() {
        let json = render_gene(&gene_summary(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["symbol"], "ALPHA");
        // The gene category serializes under its original column name
        assert_eq!(value["type"], "protein-coding");
        assert_eq!(value["locus"]["orientation"], "plus");
    }

    #[test]
    fn test_render_metadata_text() {
        let rows = vec![TranscriptMetadata {
            genome_name: "toy".to_string(),
            gene_symbol: "ALPHA".to_string(),
            ncbi_accession: "NM_000001.1".to_string(),
            biotype: "mRNA".to_string(),
            product: "alpha protein".to_string(),
            source: "BestRefSeq".to_string(),
            xrefs: Default::default(),
        }];
        let text = render_metadata(&rows, OutputFormat::Text).unwrap();
        assert_eq!(text, "NM_000001.1\tmRNA\tBestRefSeq\talpha protein\n");
    }
}
