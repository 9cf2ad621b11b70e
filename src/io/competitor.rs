use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::{Result, ToolError};

/// Heading printed above echoed competitor content.
pub const COMPETITOR_HEADING: &str = "Content of competitor's file:";

/// Raw contents of a competitor's CSV file.
///
/// Lines are kept as bytes with only the `\n` separator removed, so non-UTF-8
/// text and `\r` from CRLF files survive untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorFile {
    pub path: PathBuf,
    pub lines: Vec<Vec<u8>>,
}

impl CompetitorFile {
    /// Writes the heading followed by every line as read.
    pub fn echo<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{COMPETITOR_HEADING}")?;
        for line in &self.lines {
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Appends the `.csv` extension to a user supplied base name. The base is
/// kept as typed, so `prices.v2` becomes `prices.v2.csv`.
pub fn competitor_path(base: &Path) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".csv");
    PathBuf::from(name)
}

/// Reads `<base>.csv` line by line without interpreting it.
#[instrument(level = "info", skip_all, fields(base = %base.display()))]
pub fn read_competitor_file(base: &Path) -> Result<CompetitorFile> {
    let path = competitor_path(base);
    let file = File::open(&path).map_err(|source| ToolError::file_open(&path, source))?;

    let lines = BufReader::new(file)
        .split(b'\n')
        .collect::<std::io::Result<Vec<_>>>()?;
    debug!(line_count = lines.len(), "competitor file read");

    Ok(CompetitorFile { path, lines })
}
