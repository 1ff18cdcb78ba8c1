use bstr::BString;

use crate::directive::{classify_line, Line};
use crate::output::{Block, Expansion, Report};
use crate::{Document, Resolver};

/// Prefix of the line emitted in place of a header that could not be inlined.
pub const UNAVAILABLE_MARKER: &str = "// Error: Could not include ";

pub(crate) fn inline_impl<R: Resolver>(document: &Document, resolver: &mut R) -> Expansion {
    let mut blocks = Vec::with_capacity(document.len());
    let mut report = Report {
        input_lines: document.len(),
        ..Report::default()
    };

    for line in document.lines() {
        let path = match classify_line(line) {
            Line::Plain(text) => {
                blocks.push(Block::Line(text.to_owned()));
                continue;
            }
            Line::Include { path } => path,
        };

        let content = match resolver.resolve(path) {
            Ok(content) if !content.is_empty() => Some(content),
            Ok(_) => {
                log::warn!("Header {} is empty", path);
                None
            }
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };

        match content {
            Some(content) => {
                log::debug!("Inlined {} ({} bytes)", path, content.len());
                report.inlined += 1;
                blocks.push(Block::Header(strip_one_terminator(content).into()));
            }
            None => {
                report.unavailable.push(path.to_owned());
                let raw: &[u8] = path;
                let marker = [UNAVAILABLE_MARKER.as_bytes(), raw].concat();
                blocks.push(Block::Unavailable(BString::from(marker)));
            }
        }
    }

    Expansion { blocks, report }
}

/// The block gets its own `\n` when written, so one trailing terminator of the
/// header body is dropped here.
fn strip_one_terminator(mut content: Vec<u8>) -> Vec<u8> {
    if content.ends_with(b"\r\n") {
        content.truncate(content.len() - 2);
    } else if content.ends_with(b"\n") {
        content.truncate(content.len() - 1);
    }
    content
}
