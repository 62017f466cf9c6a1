//! Anything a fastq [Reader](super::Reader) can (re)open to get a line stream.

/* project use */
use crate::error;

/// A source is opened once per iteration, each call must restart from the beginning
pub trait Source {
    type Stream: std::io::BufRead;

    fn open(&self) -> error::Result<Self::Stream>;
}

impl Source for std::path::PathBuf {
    type Stream = std::io::BufReader<std::fs::File>;

    fn open(&self) -> error::Result<Self::Stream> {
        self.as_path().open()
    }
}

impl Source for &std::path::Path {
    type Stream = std::io::BufReader<std::fs::File>;

    fn open(&self) -> error::Result<Self::Stream> {
        log::debug!("open fastq file {}", self.display());

        let file = std::fs::File::open(self).map_err(|source| error::Error::OpenFile { source })?;

        Ok(std::io::BufReader::new(file))
    }
}

impl<'a> Source for &'a [u8] {
    type Stream = &'a [u8];

    fn open(&self) -> error::Result<Self::Stream> {
        Ok(*self)
    }
}

impl Source for Vec<u8> {
    type Stream = std::io::Cursor<Vec<u8>>;

    fn open(&self) -> error::Result<Self::Stream> {
        Ok(std::io::Cursor::new(self.clone()))
    }
}
