//! Coordinate store: byte-addressable chromosome sequence files
//!
//! Each chromosome of a genome lives in its own flat file
//! (`<genome_dir>/sequences/chr<N>.txt`) holding one unbroken line of
//! sequence characters with no headers or line breaks, so one character is
//! one byte is one base. That invariant is assumed, not enforced; the store
//! does a plain seek-and-read. Every fetch opens its own handle and closes it
//! on all exit paths.

use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::DeriveError;

/// Read-only access to a genome's per-chromosome sequence files
#[derive(Debug, Clone)]
pub struct SequenceStore {
    /// Genome directory containing the `sequences/` subdirectory
    genome_dir: PathBuf,
}

impl SequenceStore {
    pub fn new(genome_dir: impl Into<PathBuf>) -> Self {
        Self {
            genome_dir: genome_dir.into(),
        }
    }

    /// Path of the flat sequence file for a chromosome
    fn chromosome_path(&self, chromosome: &str) -> PathBuf {
        self.genome_dir
            .join("sequences")
            .join(format!("chr{chromosome}.txt"))
    }

    /// Fetch the raw sequence for `chromosome:start-end`
    ///
    /// `start` and `end` are 1-based inclusive absolute genomic coordinates;
    /// the read begins at byte offset `start - 1` and returns exactly
    /// `end - start + 1` characters.
    ///
    /// # Errors
    ///
    /// [`DeriveError::SequenceNotFound`] when the chromosome file does not
    /// exist or the window reaches past the end of the file;
    /// [`DeriveError::InvalidCoordinates`] for zero or inverted coordinates.
    pub fn fetch(&self, chromosome: &str, start: u64, end: u64) -> Result<String, DeriveError> {
        if start == 0 || start > end {
            return Err(DeriveError::InvalidCoordinates {
                msg: format!("invalid window {chromosome}:{start}-{end} (1-based, start <= end)"),
            });
        }

        let path = self.chromosome_path(chromosome);
        if !path.exists() {
            return Err(DeriveError::SequenceNotFound {
                chromosome: chromosome.to_string(),
                start,
                end,
            });
        }

        trace!(chromosome, start, end, "fetching sequence window");
        let sequence = read_window(&path, start - 1, end - start + 1).map_err(|err| {
            if err.kind() == ErrorKind::UnexpectedEof {
                DeriveError::SequenceNotFound {
                    chromosome: chromosome.to_string(),
                    start,
                    end,
                }
            } else {
                DeriveError::io(format!("reading {}", path.display()), &err)
            }
        })?;

        String::from_utf8(sequence).map_err(|_| DeriveError::Io {
            msg: format!("{}: sequence data is not valid UTF-8", path.display()),
        })
    }
}

/// Seek to `offset` and read exactly `len` bytes
fn read_window(path: &Path, offset: u64, len: u64) -> Result<Vec<u8>, std::io::Error> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;
    let mut buffer = vec![0u8; len as usize];
    file.read_exact(&mut buffer)?;
    Ok(buffer)
}
