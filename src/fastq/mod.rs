pub mod records;
pub mod source;

pub use records::Records;
pub use source::Source;

/* project use */
use crate::error;
use crate::read;

/// Fastq reader, produce [Read](read::Read) of selected variant
///
/// Each call of [Reader::iter] open source again, so a reader can be iterate many time.
/// One iteration go forward only and release source when it's dropped.
pub struct Reader<S> {
    source: S,
    variant: read::Variant,
}

impl<S> Reader<S>
where
    S: Source,
{
    /// Create a reader that produce [Variant::Dna](read::Variant::Dna) reads
    pub fn new(source: S) -> Self {
        Reader::with_variant(source, read::Variant::default())
    }

    pub fn with_variant(source: S, variant: read::Variant) -> Self {
        Reader { source, variant }
    }

    pub fn variant(&self) -> read::Variant {
        self.variant
    }

    /// Open source and return a lazy iterator over its records
    pub fn iter(&self) -> error::Result<Records<S::Stream>> {
        let stream = self.source.open()?;

        log::debug!("start fastq iteration, produce {} reads", self.variant);

        Ok(Records::new(stream, self.variant))
    }

    /// Read all records, stop on first error
    pub fn read_all(&self) -> error::Result<Vec<read::Read>> {
        self.iter()?.collect()
    }
}

impl Reader<std::path::PathBuf> {
    pub fn from_path<P>(path: P) -> Self
    where
        P: AsRef<std::path::Path>,
    {
        Reader::new(path.as_ref().to_path_buf())
    }
}
