use std::path::Path;

use bstr::{BString, ByteSlice};

use crate::{Error, MissingInput};

/// Input text split into lines. Line terminators are not kept.
///
/// Content is kept as raw bytes, so sources in any ASCII-compatible encoding
/// pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<BString>,
}

impl Document {
    /// Split raw text on `\n` / `\r\n`. Empty text gives an empty document.
    pub fn parse(text: impl AsRef<[u8]>) -> Document {
        Document {
            lines: text.as_ref().lines().map(BString::from).collect(),
        }
    }

    /// Read a whole file and split it.
    ///
    /// With [`MissingInput::Empty`] an unreadable file is logged and an empty
    /// document is returned instead of an error.
    pub fn load(path: impl AsRef<Path>, missing_input: MissingInput) -> Result<Document, Error> {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(text) => Ok(Document::parse(text)),
            Err(e) => {
                let e = Error::FailedToOpenFile {
                    path: path.to_owned(),
                    e,
                };
                match missing_input {
                    MissingInput::Empty => {
                        log::error!("{}; continuing with an empty document", e);
                        Ok(Document::default())
                    }
                    MissingInput::Fail => Err(e),
                }
            }
        }
    }

    pub fn lines(&self) -> &[BString] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
