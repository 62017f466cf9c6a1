pub mod error;
pub mod fastq;
pub mod ncbidb;
pub mod read;

pub use read::Read;
pub use read::Variant;
