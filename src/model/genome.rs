//! Genome catalog and coordinate store access
//!
//! A [`Genome`] is constructed per lookup: it reads the gene catalog once at
//! load time and resolves transcript index, transcript detail, and chromosome
//! sequence files under its data directory on demand. It is deliberately not
//! persisted between requests; re-reading the catalog is a simplicity
//! trade-off and any caching is the hosting application's concern.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DeriveError;
use crate::model::Gene;
use crate::record::{read_tsv, GeneRow, TranscriptIndexRow};
use crate::store::SequenceStore;

/// A reference genome: gene catalog plus sequence file access
#[derive(Debug)]
pub struct Genome {
    pub name: String,
    dir: PathBuf,
    store: SequenceStore,
    genes_table: Vec<GeneRow>,
}

impl Genome {
    /// Load a genome from `<data_dir>/<name>/`
    ///
    /// Reads `genes.tsv` eagerly; everything else is resolved per call.
    ///
    /// # Errors
    ///
    /// [`DeriveError::GenomeNotFound`] if the directory has no gene catalog;
    /// [`DeriveError::MalformedRecord`] or [`DeriveError::Io`] if the catalog
    /// cannot be read.
    pub fn load(data_dir: &Path, name: &str) -> Result<Self, DeriveError> {
        let dir = data_dir.join(name);
        let genes_path = dir.join("genes.tsv");
        if !genes_path.exists() {
            return Err(DeriveError::GenomeNotFound {
                name: name.to_string(),
            });
        }
        let genes_table: Vec<GeneRow> = read_tsv(&genes_path)?;
        debug!(genome = name, genes = genes_table.len(), "loaded gene catalog");
        Ok(Self {
            name: name.to_string(),
            store: SequenceStore::new(&dir),
            dir,
            genes_table,
        })
    }

    /// Number of genes in the catalog
    pub fn gene_count(&self) -> usize {
        self.genes_table.len()
    }

    /// All gene symbols in catalog order
    pub fn gene_symbols(&self) -> impl Iterator<Item = &str> {
        self.genes_table.iter().map(|row| row.symbol.as_str())
    }

    /// Look up a gene by its symbol
    ///
    /// Returns `Ok(None)` when the symbol is not in the catalog; a row that
    /// is present but unparseable is a [`DeriveError::MalformedRecord`].
    pub fn gene_by_symbol(&self, symbol: &str) -> Result<Option<Gene<'_>>, DeriveError> {
        match self.genes_table.iter().find(|row| row.symbol == symbol) {
            Some(row) => Gene::from_row(self, row).map(Some),
            None => Ok(None),
        }
    }

    /// Fetch raw genomic sequence for a chromosome window
    pub fn fetch_sequence(
        &self,
        chromosome: &str,
        start: u64,
        end: u64,
    ) -> Result<String, DeriveError> {
        self.store.fetch(chromosome, start, end)
    }

    /// Find the transcript-detail file index for a gene symbol
    ///
    /// Re-reads the index file on every call; the pipeline holds no caches.
    /// Returns `Ok(None)` when the symbol has no index entry.
    pub(crate) fn transcript_file_index(
        &self,
        gene_symbol: &str,
    ) -> Result<Option<String>, DeriveError> {
        let index_path = self.dir.join("transcripts").join("index.tsv");
        if !index_path.exists() {
            return Ok(None);
        }
        let rows: Vec<TranscriptIndexRow> = read_tsv(&index_path)?;
        Ok(rows
            .into_iter()
            .find(|row| row.gene_symbol == gene_symbol)
            .map(|row| row.file_index))
    }

    /// Path of a per-gene transcript detail file
    pub(crate) fn transcript_detail_path(&self, file_index: &str) -> PathBuf {
        self.dir.join("transcripts").join(format!("{file_index}.tsv"))
    }
}
