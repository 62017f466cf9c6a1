//! Fetch a reference sequence from a local BLAST database with `blastdbcmd`.

/* crate use */
use bstr::ByteSlice;

/* project use */
use crate::error;
use crate::read;

pub const DEFAULT_PROGRAM: &str = "blastdbcmd";
pub const DEFAULT_DB: &str = "nt";

/// Environment variable that override [DEFAULT_PROGRAM]
pub const PROGRAM_ENV: &str = "BLASTDBCMD";

/// Lookup configuration: program to run, database to search and variant of produced read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    program: String,
    db: String,
    variant: read::Variant,
}

impl Default for Lookup {
    fn default() -> Self {
        Lookup::new(DEFAULT_PROGRAM, DEFAULT_DB)
    }
}

impl Lookup {
    pub fn new<P, D>(program: P, db: D) -> Self
    where
        P: Into<String>,
        D: Into<String>,
    {
        Lookup {
            program: program.into(),
            db: db.into(),
            variant: read::Variant::Dna,
        }
    }

    /// Use program set in [PROGRAM_ENV] if any, search in [DEFAULT_DB]
    pub fn from_env() -> Self {
        let program = std::env::var(PROGRAM_ENV).unwrap_or_else(|_| DEFAULT_PROGRAM.to_string());

        Lookup::new(program, DEFAULT_DB)
    }

    pub fn with_db<D>(mut self, db: D) -> Self
    where
        D: Into<String>,
    {
        self.db = db.into();
        self
    }

    pub fn with_variant(mut self, variant: read::Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn db(&self) -> &str {
        &self.db
    }

    /// Build command that extract `entry` from database
    pub fn command(&self, entry: &str) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command
            .args(["-entry", entry, "-db", self.db.as_str()])
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());

        command
    }

    /// Get sequence of a BLAST hit, `title` look like `gi|63148399|gb|DQ011818.1| Description...`
    pub fn get_sequence(&self, title: &str) -> error::Result<read::Read> {
        let entry = entry_key(title);

        log::info!("fetch {} from database {} with {}", entry, self.db, self.program);

        let output = self
            .command(entry)
            .output()
            .map_err(|source| error::Error::SpawnCommand {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(error::Error::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: output.stderr.trim_end().to_str_lossy().into_owned(),
            });
        }

        if output.stdout.trim().is_empty() {
            return Err(error::Error::EmptyOutput {
                entry: entry.to_string(),
            });
        }

        parse_fasta(&output.stdout, self.variant)
    }
}

/// Key of database entry: everything before the first space of title
pub fn entry_key(title: &str) -> &str {
    title.split_once(' ').map_or(title, |(key, _)| key)
}

/// Parse a text that contains exactly one fasta record, read id is the first word of header
pub fn parse_fasta(data: &[u8], variant: read::Variant) -> error::Result<read::Read> {
    let mut lines = data.lines().map(|line| line.trim_end()).skip_while(|line| line.is_empty());

    let header = lines.next().ok_or(error::Error::NotAFastaRecord)?;
    if !header.starts_with(b">") {
        return Err(error::Error::NotAFastaRecord);
    }
    let id = header[1..]
        .to_str()
        .map(entry_key)
        .map_err(|_| error::Error::NotAFastaRecord)?;

    let mut sequence = String::new();
    for line in lines {
        if line.starts_with(b">") {
            return Err(error::Error::MultipleFastaRecords);
        }

        sequence.push_str(line.to_str().map_err(|_| error::Error::NotAFastaRecord)?);
    }

    variant.make_read(id, sequence, None)
}

/// Get sequence of a BLAST hit in database `db` with default program
pub fn get_sequence(title: &str, db: &str) -> error::Result<read::Read> {
    Lookup::default().with_db(db).get_sequence(title)
}
