//! Flat summary views consumed by the surrounding application
//!
//! These structs are the serialization boundary: the web or CLI layer takes
//! them as plain data and never reaches back into the entity graph.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::coords::{Bound, Locus};

/// Gene summary: metadata plus the derived genomic sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneSummary {
    pub genome_name: String,
    pub ncbi_gene_id: String,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub gene_type: String,
    pub locus: Locus,
    pub transcripts: Vec<String>,
    pub sequence: String,
}

/// Transcript metadata: no derived sequences, no sequence file access
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptMetadata {
    pub genome_name: String,
    pub gene_symbol: String,
    pub ncbi_accession: String,
    pub biotype: String,
    pub product: String,
    pub source: String,
    pub xrefs: BTreeMap<String, String>,
}

/// Transcript summary: metadata, coordinates, and all derived sequence levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptSummary {
    pub genome_name: String,
    pub gene_symbol: String,
    pub ncbi_accession: String,
    pub biotype: String,
    pub product: String,
    pub predicted: bool,
    pub source: String,
    pub xrefs: BTreeMap<String, String>,
    pub bounds: Bound,
    pub locus: Locus,
    pub exons: Vec<Bound>,
    #[serde(rename = "CDSs")]
    pub cdss: Vec<Bound>,
    /// Pre-RNA of the full transcript window
    pub sequence: String,
    pub exonic_sequence: Option<String>,
    pub coding_sequence: Option<String>,
    pub amino_acid_sequence: Option<String>,
}
