//! Annotation tables and literal field parsing
//!
//! Gene and transcript annotations arrive as TSV rows whose coordinate and
//! collection fields are stored as Python-repr style literals, e.g.
//! `('12', 'minus', 100, 130)` for a locus or `[(103, 126)]` for a CDS list.
//! Each literal field gets an explicit, schema-validated parser that fails
//! with [`DeriveError::MalformedRecord`] on any deviation; nothing here is
//! ever evaluated dynamically.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::coords::{Bound, Locus, Strand};
use crate::error::DeriveError;

/// One row of a genome's `genes.tsv`
#[derive(Debug, Clone, Deserialize)]
pub struct GeneRow {
    pub ncbi_gene_id: String,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub gene_type: String,
    /// Locus literal, e.g. `('1', 'plus', 11, 40)`
    pub locus: String,
    /// Accession list literal, e.g. `['NM_000001.1', 'NR_000011.1']`
    pub transcripts: String,
}

/// One row of a genome's `transcripts/index.tsv`
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptIndexRow {
    pub gene_symbol: String,
    pub file_index: String,
}

/// One row of a per-gene `transcripts/<file_index>.tsv`
///
/// Detail files also carry `gene`, `start_codon`, and `stop_codon` columns;
/// the derivation chain has no use for them and they are not deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptRow {
    pub transcript: String,
    pub transcript_biotype: String,
    pub product: String,
    pub source: String,
    /// Comma-separated `key:value` pairs
    pub xref: String,
    /// Bound pair literal, e.g. `(100, 130)`
    pub transcript_bounds: String,
    /// Bound list literal, e.g. `[(100, 130)]`
    pub exons: String,
    #[serde(rename = "CDSs")]
    pub cdss: String,
}

/// Read a whole TSV file into typed rows
///
/// # Errors
///
/// [`DeriveError::Io`] if the file cannot be opened or read,
/// [`DeriveError::MalformedRecord`] if a row does not match the schema.
pub fn read_tsv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DeriveError> {
    let file =
        File::open(path).map_err(|err| DeriveError::io(format!("opening {}", path.display()), &err))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result.map_err(|err| DeriveError::MalformedRecord {
            field: path.display().to_string(),
            msg: err.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}

fn malformed(field: &str, msg: impl Into<String>) -> DeriveError {
    DeriveError::MalformedRecord {
        field: field.to_string(),
        msg: msg.into(),
    }
}

/// Strip a matched pair of enclosing delimiters
fn strip_delimiters<'a>(
    literal: &'a str,
    open: char,
    close: char,
    field: &str,
) -> Result<&'a str, DeriveError> {
    let trimmed = literal.trim();
    trimmed
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .ok_or_else(|| malformed(field, format!("expected '{open}...{close}', got '{trimmed}'")))
}

/// Strip a matched pair of single or double quotes
fn unquote<'a>(element: &'a str, field: &str) -> Result<&'a str, DeriveError> {
    let trimmed = element.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .or_else(|| {
            trimmed
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
        });
    unquoted.ok_or_else(|| malformed(field, format!("expected quoted string, got '{trimmed}'")))
}

fn parse_coordinate(element: &str, field: &str) -> Result<u64, DeriveError> {
    element
        .trim()
        .parse::<u64>()
        .map_err(|_| malformed(field, format!("expected integer coordinate, got '{}'", element.trim())))
}

/// Parse a locus literal: `('<chrom>', '<plus|minus>', <start>, <end>)`
pub fn parse_locus(literal: &str) -> Result<Locus, DeriveError> {
    let inner = strip_delimiters(literal, '(', ')', "locus")?;
    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 4 {
        return Err(malformed(
            "locus",
            format!("expected 4 elements, got {}", parts.len()),
        ));
    }
    let chromosome = unquote(parts[0], "locus")?;
    let orientation: Strand = unquote(parts[1], "locus")?.parse()?;
    let start = parse_coordinate(parts[2], "locus")?;
    let end = parse_coordinate(parts[3], "locus")?;
    Locus::new(chromosome, orientation, start, end)
}

fn parse_pair_body(body: &str, field: &str) -> Result<Bound, DeriveError> {
    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != 2 {
        return Err(malformed(
            field,
            format!("expected '(start, end)', got '({body})'"),
        ));
    }
    let start = parse_coordinate(parts[0], field)?;
    let end = parse_coordinate(parts[1], field)?;
    if start > end {
        return Err(malformed(field, format!("start {start} exceeds end {end}")));
    }
    Ok((start, end))
}

/// Parse a bound pair literal: `(<start>, <end>)`
pub fn parse_bound_pair(literal: &str, field: &str) -> Result<Bound, DeriveError> {
    let body = strip_delimiters(literal, '(', ')', field)?;
    parse_pair_body(body, field)
}

/// Parse a bound list literal: `[(<s>, <e>), ...]` (empty `[]` allowed)
pub fn parse_bound_list(literal: &str, field: &str) -> Result<Vec<Bound>, DeriveError> {
    let inner = strip_delimiters(literal, '[', ']', field)?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut bounds = Vec::new();
    for (position, piece) in inner.split(')').enumerate() {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        // Pairs after the first must be separated by a comma
        let piece = if position == 0 {
            piece
        } else {
            piece
                .strip_prefix(',')
                .map(str::trim_start)
                .ok_or_else(|| {
                    malformed(field, format!("expected ',' between bound pairs at '{piece}'"))
                })?
        };
        let body = piece.strip_prefix('(').ok_or_else(|| {
            malformed(field, format!("expected '(start, end)' pair, got '{piece}'"))
        })?;
        bounds.push(parse_pair_body(body, field)?);
    }
    if bounds.is_empty() {
        return Err(malformed(field, format!("no bound pairs in '{literal}'")));
    }
    Ok(bounds)
}

/// Parse an accession list literal: `['NM_x', 'NR_y', ...]`
///
/// Accessions are de-duplicated, keeping the order of first occurrence.
pub fn parse_accession_list(literal: &str) -> Result<Vec<String>, DeriveError> {
    let inner = strip_delimiters(literal, '[', ']', "transcripts")?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut accessions: Vec<String> = Vec::new();
    for element in inner.split(',') {
        let accession = unquote(element, "transcripts")?;
        if !accessions.iter().any(|seen| seen == accession) {
            accessions.push(accession.to_string());
        }
    }
    Ok(accessions)
}

/// Parse an xref field: comma-separated `key:value` entries
///
/// Values may contain colons; the split happens at the first colon only. An
/// entry without a colon makes the record malformed. An empty field is an
/// empty map.
pub fn parse_xrefs(field: &str) -> Result<BTreeMap<String, String>, DeriveError> {
    let mut xrefs = BTreeMap::new();
    if field.trim().is_empty() {
        return Ok(xrefs);
    }
    for entry in field.split(',') {
        let (key, value) = entry
            .split_once(':')
            .ok_or_else(|| malformed("xref", format!("entry '{entry}' has no key:value pair")))?;
        xrefs.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(xrefs)
}
