//! Transcript entity and the sequence derivation chain
//!
//! A [`Transcript`] is one row of a per-gene detail file, scoped to its
//! parent [`Gene`]. The derivation chain runs coordinate store → transcribe →
//! splice → translate; every level is recomputed on each call.

use std::collections::BTreeMap;
use std::io::Write;

use crate::coords::{Bound, Locus, Strand};
use crate::error::DeriveError;
use crate::model::summary::{TranscriptMetadata, TranscriptSummary};
use crate::model::{Gene, Genome};
use crate::record::{self, TranscriptRow};
use crate::seq::{reverse_complement, transcribe, translate, Alphabet};
use crate::splice::splice;

/// Biotype with a coding sequence; everything else derives none
const CODING_BIOTYPE: &str = "mRNA";

/// One transcript of a gene
#[derive(Debug)]
pub struct Transcript<'g> {
    genome: &'g Genome,
    gene: &'g Gene<'g>,
    pub ncbi_accession: String,
    /// e.g. "mRNA" or "ncRNA"; only "mRNA" has a coding sequence
    pub biotype: String,
    pub product: String,
    pub source: String,
    /// Predicted model (accession starts with "X")
    pub predicted: bool,
    /// Cross-references, `key -> value`
    pub xrefs: BTreeMap<String, String>,
    /// Transcript genomic span, 1-based inclusive
    pub bounds: Bound,
    /// Exon bound pairs, absolute genomic coordinates
    pub exons: Vec<Bound>,
    /// CDS bound pairs, absolute genomic coordinates (empty unless mRNA)
    pub cdss: Vec<Bound>,
}

impl<'g> Transcript<'g> {
    pub(crate) fn from_row(
        genome: &'g Genome,
        gene: &'g Gene<'g>,
        row: &TranscriptRow,
    ) -> Result<Self, DeriveError> {
        Ok(Self {
            genome,
            gene,
            ncbi_accession: row.transcript.clone(),
            biotype: row.transcript_biotype.clone(),
            product: row.product.clone(),
            source: row.source.clone(),
            predicted: row.transcript.starts_with('X'),
            xrefs: record::parse_xrefs(&row.xref)?,
            bounds: record::parse_bound_pair(&row.transcript_bounds, "transcript_bounds")?,
            exons: record::parse_bound_list(&row.exons, "exons")?,
            cdss: record::parse_bound_list(&row.cdss, "CDSs")?,
        })
    }

    /// The gene this transcript belongs to
    pub fn gene(&self) -> &Gene<'g> {
        self.gene
    }

    /// Transcript locus: chromosome and orientation inherited from the gene,
    /// span from the transcript bounds
    pub fn locus(&self) -> Locus {
        Locus {
            chromosome: self.gene.locus.chromosome.clone(),
            orientation: self.gene.locus.orientation,
            start: self.bounds.0,
            end: self.bounds.1,
        }
    }

    fn is_minus(&self) -> bool {
        self.gene.locus.orientation == Strand::Minus
    }

    /// The transcribed pre-RNA sequence of the transcript's genomic window
    ///
    /// Fetched from the coordinate store, transcribed, and
    /// reverse-complemented (RNA) for minus-strand transcripts so it reads
    /// 5′→3′. This is the strand-corrected window the splicer consumes.
    pub fn sequence(&self) -> Result<String, DeriveError> {
        let window = self.genome.fetch_sequence(
            &self.gene.locus.chromosome,
            self.bounds.0,
            self.bounds.1,
        )?;
        let pre_rna = transcribe(&window);
        if self.is_minus() {
            reverse_complement(&pre_rna, Alphabet::Rna)
        } else {
            Ok(pre_rna)
        }
    }

    /// The spliced exonic RNA sequence, or `None` when no exons are annotated
    pub fn exonic_sequence(&self) -> Result<Option<String>, DeriveError> {
        if self.exons.is_empty() {
            return Ok(None);
        }
        splice(&self.sequence()?, &self.exons, self.bounds.0, self.is_minus()).map(Some)
    }

    /// The spliced coding RNA sequence (start codon through stop codon)
    ///
    /// `None` when no CDS regions are annotated or the biotype is not
    /// "mRNA" — both are valid biological states, not errors.
    pub fn coding_sequence(&self) -> Result<Option<String>, DeriveError> {
        if self.cdss.is_empty() || self.biotype != CODING_BIOTYPE {
            return Ok(None);
        }
        splice(&self.sequence()?, &self.cdss, self.bounds.0, self.is_minus()).map(Some)
    }

    /// The translated protein sequence
    ///
    /// `None` for non-coding biotypes and transcripts without a coding
    /// sequence. A coding sequence whose length is not a multiple of three is
    /// a hard [`DeriveError::InvalidCodon`] failure; nothing is truncated.
    pub fn amino_acid_sequence(&self) -> Result<Option<String>, DeriveError> {
        if self.biotype != CODING_BIOTYPE {
            return Ok(None);
        }
        match self.coding_sequence()? {
            Some(coding) => translate(&coding).map(Some),
            None => Ok(None),
        }
    }

    /// Metadata view; touches no sequence files
    pub fn metadata(&self) -> TranscriptMetadata {
        TranscriptMetadata {
            genome_name: self.genome.name.clone(),
            gene_symbol: self.gene.symbol.clone(),
            ncbi_accession: self.ncbi_accession.clone(),
            biotype: self.biotype.clone(),
            product: self.product.clone(),
            source: self.source.clone(),
            xrefs: self.xrefs.clone(),
        }
    }

    /// Summary view including every derived sequence level
    pub fn summary(&self) -> Result<TranscriptSummary, DeriveError> {
        Ok(TranscriptSummary {
            genome_name: self.genome.name.clone(),
            gene_symbol: self.gene.symbol.clone(),
            ncbi_accession: self.ncbi_accession.clone(),
            biotype: self.biotype.clone(),
            product: self.product.clone(),
            predicted: self.predicted,
            source: self.source.clone(),
            xrefs: self.xrefs.clone(),
            bounds: self.bounds,
            locus: self.locus(),
            exons: self.exons.clone(),
            cdss: self.cdss.clone(),
            sequence: self.sequence()?,
            exonic_sequence: self.exonic_sequence()?,
            coding_sequence: self.coding_sequence()?,
            amino_acid_sequence: self.amino_acid_sequence()?,
        })
    }

    /// Write every derived sequence level as FASTA records
    ///
    /// Levels that derive to `None` are skipped.
    pub fn write_fasta(&self, writer: &mut impl Write) -> Result<(), DeriveError> {
        let io_err = |err: &std::io::Error| DeriveError::io("writing FASTA", err);

        let mut emit = |header: &str, sequence: &str| -> Result<(), DeriveError> {
            writeln!(writer, ">{header}\n{sequence}").map_err(|err| io_err(&err))
        };

        emit("transcript_sequence", &self.sequence()?)?;
        if let Some(exonic) = self.exonic_sequence()? {
            emit("exonic_sequence", &exonic)?;
        }
        if let Some(coding) = self.coding_sequence()? {
            emit("cds_sequence", &coding)?;
        }
        if let Some(protein) = self.amino_acid_sequence()? {
            emit("protein_sequence", &protein)?;
        }
        Ok(())
    }
}
