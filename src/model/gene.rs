//! Gene entity and its derived genomic sequence

use rayon::prelude::*;
use tracing::debug;

use crate::coords::{Locus, Strand};
use crate::error::DeriveError;
use crate::model::summary::{GeneSummary, TranscriptMetadata};
use crate::model::{Genome, Transcript};
use crate::record::{read_tsv, GeneRow, TranscriptRow};
use crate::seq::{reverse_complement, Alphabet};

/// One gene of a genome's catalog
///
/// Holds a borrowed handle to its [`Genome`] for sequence and transcript
/// lookups. Transcript accessions are de-duplicated at parse time and
/// partitioned on demand by the NCBI prefix convention: `NM_` curated mRNA,
/// `NR_` curated non-coding, `XM_`/`XR_` predicted.
#[derive(Debug)]
pub struct Gene<'g> {
    genome: &'g Genome,
    pub ncbi_gene_id: String,
    pub symbol: String,
    pub name: String,
    /// Free-text category, e.g. "protein-coding" or "miRNA"
    pub gene_type: String,
    pub locus: Locus,
    /// NCBI transcript accessions, de-duplicated
    pub transcripts: Vec<String>,
}

impl<'g> Gene<'g> {
    pub(crate) fn from_row(genome: &'g Genome, row: &GeneRow) -> Result<Self, DeriveError> {
        Ok(Self {
            genome,
            ncbi_gene_id: row.ncbi_gene_id.clone(),
            symbol: row.symbol.clone(),
            name: row.name.clone(),
            gene_type: row.gene_type.clone(),
            locus: crate::record::parse_locus(&row.locus)?,
            transcripts: crate::record::parse_accession_list(&row.transcripts)?,
        })
    }

    /// The genome this gene belongs to
    pub fn genome(&self) -> &Genome {
        self.genome
    }

    fn accessions_with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.transcripts
            .iter()
            .filter(|accession| accession.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }

    /// Curated mRNA accessions (`NM_`)
    pub fn curated_mrna_accessions(&self) -> Vec<&str> {
        self.accessions_with_prefix("NM_")
    }

    /// Curated non-coding accessions (`NR_`)
    pub fn curated_noncoding_accessions(&self) -> Vec<&str> {
        self.accessions_with_prefix("NR_")
    }

    /// Predicted mRNA accessions (`XM_`)
    pub fn predicted_mrna_accessions(&self) -> Vec<&str> {
        self.accessions_with_prefix("XM_")
    }

    /// Predicted non-coding accessions (`XR_`)
    pub fn predicted_noncoding_accessions(&self) -> Vec<&str> {
        self.accessions_with_prefix("XR_")
    }

    /// The gene's genomic span, strand-corrected
    ///
    /// Fetches the locus window from the coordinate store and
    /// reverse-complements it (DNA) for minus-strand genes so the result
    /// reads 5′→3′.
    pub fn sequence(&self) -> Result<String, DeriveError> {
        let window = self.genome.fetch_sequence(
            &self.locus.chromosome,
            self.locus.start,
            self.locus.end,
        )?;
        match self.locus.orientation {
            Strand::Minus => reverse_complement(&window, Alphabet::Dna),
            Strand::Plus => Ok(window),
        }
    }

    /// Resolve one of this gene's transcripts by NCBI accession
    ///
    /// Locates the per-gene transcript detail file through the transcript
    /// index and constructs a [`Transcript`] from the matching row. Returns
    /// `Ok(None)` when the gene has no index entry, the detail file is
    /// missing, or the accession is absent from it.
    pub fn transcript_by_accession(
        &self,
        accession: &str,
    ) -> Result<Option<Transcript<'_>>, DeriveError> {
        let Some(file_index) = self.genome.transcript_file_index(&self.symbol)? else {
            debug!(symbol = %self.symbol, "gene has no transcript index entry");
            return Ok(None);
        };
        let detail_path = self.genome.transcript_detail_path(&file_index);
        if !detail_path.exists() {
            debug!(symbol = %self.symbol, %file_index, "transcript detail file missing");
            return Ok(None);
        }
        let rows: Vec<TranscriptRow> = read_tsv(&detail_path)?;
        match rows.into_iter().find(|row| row.transcript == accession) {
            Some(row) => Transcript::from_row(self.genome, self, &row).map(Some),
            None => Ok(None),
        }
    }

    /// Metadata for every transcript listed on this gene
    ///
    /// Accessions absent from the detail file are skipped. Each lookup is an
    /// independent read-only file access, so they run in parallel.
    pub fn transcripts_metadata(&self) -> Result<Vec<TranscriptMetadata>, DeriveError> {
        let metadata: Vec<Option<TranscriptMetadata>> = self
            .transcripts
            .par_iter()
            .map(|accession| {
                Ok(self
                    .transcript_by_accession(accession)?
                    .map(|transcript| transcript.metadata()))
            })
            .collect::<Result<_, DeriveError>>()?;
        Ok(metadata.into_iter().flatten().collect())
    }

    /// Summary view including the derived genomic sequence
    pub fn summary(&self) -> Result<GeneSummary, DeriveError> {
        Ok(GeneSummary {
            genome_name: self.genome.name.clone(),
            ncbi_gene_id: self.ncbi_gene_id.clone(),
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            gene_type: self.gene_type.clone(),
            locus: self.locus.clone(),
            transcripts: self.transcripts.clone(),
            sequence: self.sequence()?,
        })
    }
}
