use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bstr::{BStr, BString, ByteSlice};

use crate::Error;

/// One output unit. Every input line maps to exactly one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Input line copied unchanged.
    Line(BString),
    /// Body of an inlined header. May span many physical lines.
    Header(BString),
    /// Marker line for a header that was missing or empty.
    Unavailable(BString),
}

impl Block {
    pub fn as_bstr(&self) -> &BStr {
        match self {
            Block::Line(x) | Block::Header(x) | Block::Unavailable(x) => x.as_bstr(),
        }
    }
}

/// What happened during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub input_lines: usize,
    pub inlined: usize,
    /// Header paths that were replaced by a marker, in order of appearance.
    pub unavailable: Vec<BString>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines read, {} headers inlined",
            self.input_lines, self.inlined
        )?;
        if !self.unavailable.is_empty() {
            write!(
                f,
                ", {} unavailable: {}",
                self.unavailable.len(),
                itertools::join(&self.unavailable, ", ")
            )?;
        }
        Ok(())
    }
}

/// Result of the substitution pass, ready to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    pub blocks: Vec<Block>,
    pub report: Report,
}

impl Expansion {
    /// Write each block followed by a single `\n`.
    pub fn write<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for block in &self.blocks {
            out.write_all(block.as_bstr())?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }

    /// Create (or truncate) `path` and write the expansion into it.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::FailedToCreateOutput {
            path: path.to_owned(),
            e,
        })?;
        self.write(BufWriter::new(file))
            .map_err(|e| Error::FailedToWriteOutput {
                path: path.to_owned(),
                e,
            })
    }

    /// Same bytes that [`Expansion::write`] produces.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for block in &self.blocks {
            buf.extend_from_slice(block.as_bstr());
            buf.push(b'\n');
        }
        buf
    }
}

/// Lossy for content that is not UTF-8.
impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            writeln!(f, "{}", block.as_bstr())?;
        }
        Ok(())
    }
}
