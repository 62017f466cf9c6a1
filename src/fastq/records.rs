//! Lazy decoding of a fastq stream, one record per call.

/* crate use */
use bstr::ByteSlice;

/* project use */
use crate::error;
use crate::read;

/// Iterator over [Read](read::Read) of a fastq stream
///
/// Stream is own by Records and close when Records is dropped. After the first error iteration stop.
pub struct Records<R> {
    stream: R,
    variant: read::Variant,
    buffer: Vec<u8>,
    line: usize,
    count: u64,
    finished: bool,
}

impl<R> Records<R>
where
    R: std::io::BufRead,
{
    pub fn new(stream: R, variant: read::Variant) -> Self {
        Records {
            stream,
            variant,
            buffer: Vec::with_capacity(256),
            line: 0,
            count: 0,
            finished: false,
        }
    }

    /// Number of line consumed
    pub fn line(&self) -> usize {
        self.line
    }

    fn get_line(&mut self) -> error::Result<Option<String>> {
        self.buffer.clear();

        let len = self
            .stream
            .read_until(b'\n', &mut self.buffer)
            .map_err(|source| error::Error::ReadFile { source })?;
        if len == 0 {
            return Ok(None);
        }
        self.line += 1;

        let mut content = &self.buffer[..];
        content = content.strip_suffix(b"\n").unwrap_or(content);
        content = content.strip_suffix(b"\r").unwrap_or(content);

        let content = content
            .to_str()
            .map_err(|_| error::Error::NotUtf8 { line: self.line })?;

        Ok(Some(content.to_string()))
    }

    fn get_record_line(&mut self) -> error::Result<String> {
        let expected = self.line + 1;

        self.get_line()?
            .ok_or(error::Error::PartialRecord { line: expected })
    }

    pub fn next_record(&mut self) -> error::Result<Option<read::Read>> {
        let header = match self.get_line()? {
            Some(header) => header,
            None => return Ok(None),
        };

        let id = header
            .strip_prefix('@')
            .ok_or(error::Error::MissingIdentifierMarker { line: self.line })?
            .to_string();

        let sequence = self.get_record_line()?;

        let plus = self.get_record_line()?;
        if !plus.starts_with('+') {
            return Err(error::Error::MissingSeparatorMarker { line: self.line });
        }

        let quality = self.get_record_line()?;

        self.variant
            .make_read(id, sequence, Some(quality))
            .map(Some)
    }
}

impl<R> Iterator for Records<R>
where
    R: std::io::BufRead,
{
    type Item = error::Result<read::Read>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_record() {
            Ok(Some(record)) => {
                self.count += 1;
                log::trace!("decode record {} ({})", self.count, record.id());

                Some(Ok(record))
            }
            Ok(None) => {
                self.finished = true;
                log::debug!("end of fastq stream after {} records", self.count);

                None
            }
            Err(e) => {
                self.finished = true;
                log::warn!("stop fastq decoding after {} records: {}", self.count, e);

                Some(Err(e))
            }
        }
    }
}

impl<R> std::iter::FusedIterator for Records<R> where R: std::io::BufRead {}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(data: &[u8]) -> Records<&[u8]> {
        crate::tests::init_logger();

        Records::new(data, read::Variant::Dna)
    }

    #[test]
    fn next_record() {
        let mut reader = records(b"@id1\nACGT\n+\n!!!!\n@id2\nTGCA\n+id2\n????\n");

        let first = reader.next_record().unwrap().unwrap();
        assert_eq!(first.id(), "id1");
        assert_eq!(reader.line(), 4);

        let second = reader.next_record().unwrap().unwrap();
        assert_eq!(second.id(), "id2");
        assert_eq!(second.quality(), Some("????"));
        assert_eq!(reader.line(), 8);

        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn keep_identifier_after_marker() {
        let mut reader = records(b"@read 1 length=4\nACGT\n+\n!!!!");

        let record = reader.next().unwrap().unwrap();

        assert_eq!(record.id(), "read 1 length=4");
    }

    #[test]
    fn crlf() {
        let mut reader = records(b"@id1\r\nACGT\r\n+\r\n!!!!\r\n");

        let record = reader.next().unwrap().unwrap();

        assert_eq!(record.id(), "id1");
        assert_eq!(record.sequence(), "ACGT");
        assert_eq!(record.quality(), Some("!!!!"));
        assert!(reader.next().is_none());

        let mut reader = records(b"@id1\r\nACGT\r\n+\r\n!!!!\r");

        let record = reader.next().unwrap().unwrap();

        assert_eq!(record.quality(), Some("!!!!"));
        assert!(reader.next().is_none());
    }

    #[test]
    fn read_error() {
        struct Broken;

        impl std::io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk failure"))
            }
        }

        let stream = std::io::Read::chain(&b"@id1\nACGT\n+\n!!!!\n@id2\n"[..], Broken);
        let mut reader = Records::new(std::io::BufReader::new(stream), read::Variant::Dna);

        assert!(reader.next().unwrap().is_ok());

        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, error::Error::ReadFile { .. }));
        assert_eq!(err.kind(), error::ErrorKind::Io);
        assert!(reader.next().is_none());
    }

    #[test]
    fn missing_identifier_marker() {
        let mut reader = records(b"@id1\nACGT\n+\n!!!!\nid2\nTGCA\n+\n????\n");

        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next(),
            Some(Err(error::Error::MissingIdentifierMarker { line: 5 }))
        ));
        assert!(reader.next().is_none());
    }

    #[test]
    fn blank_line_between_records() {
        let mut reader = records(b"@id1\nACGT\n+\n!!!!\n\n@id2\nTGCA\n+\n????\n");

        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next(),
            Some(Err(error::Error::MissingIdentifierMarker { line: 5 }))
        ));
    }

    #[test]
    fn missing_separator_marker() {
        let mut reader = records(b"@id1\nACGT\n-\n!!!!\n");

        assert!(matches!(
            reader.next(),
            Some(Err(error::Error::MissingSeparatorMarker { line: 3 }))
        ));
        assert!(reader.next().is_none());
    }

    #[test]
    fn partial_record() {
        assert!(matches!(
            records(b"@id1").next(),
            Some(Err(error::Error::PartialRecord { line: 2 }))
        ));
        assert!(matches!(
            records(b"@id1\nACGT").next(),
            Some(Err(error::Error::PartialRecord { line: 3 }))
        ));
        assert!(matches!(
            records(b"@id1\nACGT\n+\n").next(),
            Some(Err(error::Error::PartialRecord { line: 4 }))
        ));
    }

    #[test]
    fn length_mismatch() {
        let mut reader = records(b"@id1\nACGT\n+\n!!!\n@id2\nTGCA\n+\n????\n");

        assert!(matches!(
            reader.next(),
            Some(Err(error::Error::LengthMismatch {
                sequence: 4,
                quality: 3
            }))
        ));
        assert!(reader.next().is_none());
    }

    #[test]
    fn not_utf8() {
        let mut reader = records(b"@id1\nAC\xffT\n+\n!!!!\n");

        assert!(matches!(
            reader.next(),
            Some(Err(error::Error::NotUtf8 { line: 2 }))
        ));
    }

    #[test]
    fn empty_sequence() {
        let mut reader = records(b"@empty\n\n+\n\n");

        let record = reader.next().unwrap().unwrap();

        assert!(record.is_empty());
        assert_eq!(record.quality(), Some(""));
        assert!(reader.next().is_none());
    }
}
