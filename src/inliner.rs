use std::path::Path;

use crate::{inline_includes, Document, Error, FsResolver, MissingInput, Report};

/// Stateful front end: `load` an input file, then `process` it into an output file.
#[derive(Debug, Default)]
pub struct Inliner {
    missing_input: MissingInput,
    document: Document,
}

impl Inliner {
    pub fn new(missing_input: MissingInput) -> Inliner {
        Inliner {
            missing_input,
            document: Document::default(),
        }
    }

    /// Replace the current document with the content of `path`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.document = Document::load(path, self.missing_input)?;
        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Inline headers of the loaded document and write the result to `output`.
    /// Headers are looked up relative to the current working directory.
    pub fn process(&self, output: impl AsRef<Path>) -> Result<Report, Error> {
        let output = output.as_ref();
        let expansion = inline_includes(&self.document, &mut FsResolver);
        expansion.write_to_file(output)?;
        log::info!("{}: {}", output.display(), expansion.report);
        Ok(expansion.report)
    }
}
