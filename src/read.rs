//! Immutable sequencing read tagged with the alphabet it's supposed to use.

/* project use */
use crate::error;

/// Alphabet a [Read] is expected to be written in
///
/// Tag only, symbols of sequence aren't check against alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Dna,
    Rna,
    AminoAcid,
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Dna
    }
}

impl Variant {
    /// Build a [Read] of this variant
    pub fn make_read<I, S>(self, id: I, sequence: S, quality: Option<String>) -> error::Result<Read>
    where
        I: Into<String>,
        S: Into<String>,
    {
        Read::new(self, id, sequence, quality)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Dna => write!(f, "dna"),
            Variant::Rna => write!(f, "rna"),
            Variant::AminoAcid => write!(f, "aa"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError(String);

impl std::fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknow read variant {}", self.0)
    }
}

impl std::error::Error for ParseVariantError {}

impl std::str::FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(Variant::Dna),
            "rna" => Ok(Variant::Rna),
            "aa" | "amino-acid" | "protein" => Ok(Variant::AminoAcid),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// One biological sequence with optional per base quality
///
/// Equality compare identifier, sequence, quality and variant without any normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Read {
    id: String,
    sequence: String,
    quality: Option<String>,
    variant: Variant,
}

impl Read {
    /// Create a new Read, quality must have same length as sequence
    pub fn new<I, S>(
        variant: Variant,
        id: I,
        sequence: S,
        quality: Option<String>,
    ) -> error::Result<Self>
    where
        I: Into<String>,
        S: Into<String>,
    {
        let sequence = sequence.into();

        if let Some(qual) = &quality {
            let (seq_len, qual_len) = (sequence.chars().count(), qual.chars().count());
            if qual_len != seq_len {
                return Err(error::Error::LengthMismatch {
                    sequence: seq_len,
                    quality: qual_len,
                });
            }
        }

        Ok(Self {
            id: id.into(),
            sequence,
            quality,
            variant,
        })
    }

    pub fn dna<I, S>(id: I, sequence: S, quality: Option<String>) -> error::Result<Self>
    where
        I: Into<String>,
        S: Into<String>,
    {
        Self::new(Variant::Dna, id, sequence, quality)
    }

    pub fn rna<I, S>(id: I, sequence: S, quality: Option<String>) -> error::Result<Self>
    where
        I: Into<String>,
        S: Into<String>,
    {
        Self::new(Variant::Rna, id, sequence, quality)
    }

    pub fn amino_acid<I, S>(id: I, sequence: S, quality: Option<String>) -> error::Result<Self>
    where
        I: Into<String>,
        S: Into<String>,
    {
        Self::new(Variant::AminoAcid, id, sequence, quality)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn quality(&self) -> Option<&str> {
        self.quality.as_deref()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of symbol (char) in sequence, not bytes
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Render read as a four line fastq record, read without quality can't be render
    pub fn to_fastq(&self) -> error::Result<String> {
        let quality = self
            .quality
            .as_ref()
            .ok_or_else(|| error::Error::MissingQuality {
                id: self.id.clone(),
            })?;

        Ok(format!("@{}\n{}\n+\n{}\n", self.id, self.sequence, quality))
    }

    /// Render read as a two line fasta record
    pub fn to_fasta(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Read {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, ">{}\n{}", self.id, self.sequence)
    }
}
