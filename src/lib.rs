use bstr::{BStr, ByteSlice};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type UserError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot open file {path}: {e}", path=path.display())]
    FailedToOpenFile { path: PathBuf, e: std::io::Error },
    #[error("Cannot open output file {path}: {e}", path=path.display())]
    FailedToCreateOutput { path: PathBuf, e: std::io::Error },
    #[error("Cannot write output file {path}: {e}", path=path.display())]
    FailedToWriteOutput { path: PathBuf, e: std::io::Error },
    #[error("Error from callback: {e}")]
    ErrorFromCallback { e: UserError },
}

/// What to do when the input file itself cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingInput {
    /// Log the error and carry on with an empty document, producing an empty output.
    #[default]
    Empty,
    /// Stop with [`Error::FailedToOpenFile`].
    Fail,
}

/// Source of header contents for the substitution pass.
///
/// You may specify a closure instead of a manual trait implementation.
pub trait Resolver {
    /// Called once for every well-formed `#include "..."` line, in document order,
    /// with the bytes found between the quotes.
    ///
    /// Returned bytes are inserted verbatim. Returning an error or nothing makes
    /// the pass emit a marker line instead of the header. Neither stops the pass.
    fn resolve(&mut self, header_path: &BStr) -> Result<Vec<u8>, Error>;
}

impl<F: FnMut(&BStr) -> Result<Vec<u8>, Error>> Resolver for F {
    fn resolve(&mut self, header_path: &BStr) -> Result<Vec<u8>, Error> {
        (self)(header_path)
    }
}

/// Reads headers from the filesystem, relative to the current working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResolver;

impl Resolver for FsResolver {
    fn resolve(&mut self, header_path: &BStr) -> Result<Vec<u8>, Error> {
        let path = header_path.to_path_lossy();
        std::fs::read(&path).map_err(|e| Error::FailedToOpenFile {
            path: path.into_owned(),
            e,
        })
    }
}

/// Replace every quoted include line of `document` with the bytes `resolver` returns for it.
///
/// It is low-level IO-agnostic function: your callback is responsible for reading the data.
/// Expansion is single-level; directives inside inlined text are left as they are.
pub fn inline_includes<R: Resolver>(document: &Document, resolver: &mut R) -> Expansion {
    inline_impl::inline_impl(document, resolver)
}

/// Easy function to inline the headers of `input` and write the result to `output`.
///
/// Security: Note that the input may name arbitrary files, including absolute paths.
/// Use IO-less `inline_includes` function if you want to control what is allowed to be read.
pub fn inline_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    missing_input: MissingInput,
) -> Result<Report, Error> {
    let mut inliner = Inliner::new(missing_input);
    inliner.load(input)?;
    inliner.process(output)
}

pub use directive::{classify_line, Line, INCLUDE_MARKER};
pub use document::Document;
pub use inline_impl::UNAVAILABLE_MARKER;
pub use inliner::Inliner;
pub use output::{Block, Expansion, Report};

mod directive;
mod document;
mod inline_impl;
mod inliner;
mod output;
