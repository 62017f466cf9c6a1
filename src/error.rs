/// Coarse classification of [Error]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Format,
    Io,
    Lookup,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("quality length {quality} differs from sequence length {sequence}")]
    LengthMismatch { sequence: usize, quality: usize },

    #[error("read {id} has no quality and can't be written as fastq")]
    MissingQuality { id: String },

    #[error("line {line}: identifier line doesn't start with '@'")]
    MissingIdentifierMarker { line: usize },

    #[error("line {line}: separator line doesn't start with '+'")]
    MissingSeparatorMarker { line: usize },

    #[error("line {line}: input end in the middle of a record")]
    PartialRecord { line: usize },

    #[error("line {line}: input isn't valid utf-8")]
    NotUtf8 { line: usize },

    #[error("dark_reads can't open file {source}")]
    OpenFile { source: std::io::Error },

    #[error("dark_reads failled to read input {source}")]
    ReadFile { source: std::io::Error },

    #[error("dark_reads can't run {program} {source}")]
    SpawnCommand {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exit with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("database lookup of {entry} return nothing")]
    EmptyOutput { entry: String },

    #[error("lookup output seems not be a fasta record")]
    NotAFastaRecord,

    #[error("lookup output contains more than one fasta record")]
    MultipleFastaRecords,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LengthMismatch { .. } | Error::MissingQuality { .. } => ErrorKind::Validation,
            Error::MissingIdentifierMarker { .. }
            | Error::MissingSeparatorMarker { .. }
            | Error::PartialRecord { .. }
            | Error::NotUtf8 { .. } => ErrorKind::Format,
            Error::OpenFile { .. } | Error::ReadFile { .. } => ErrorKind::Io,
            Error::SpawnCommand { .. }
            | Error::CommandFailed { .. }
            | Error::EmptyOutput { .. }
            | Error::NotAFastaRecord
            | Error::MultipleFastaRecords => ErrorKind::Lookup,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
