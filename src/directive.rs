use bstr::{BStr, ByteSlice};

/// Token that marks a line as an include directive candidate.
pub const INCLUDE_MARKER: &str = "#include";

/// Classification of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Anything that is not a well-formed quoted include. Copied to the output as is.
    Plain(&'a BStr),
    /// `#include` with a path between the first and the last double quote.
    Include { path: &'a BStr },
}

/// Classify a single line (without its terminator).
///
/// The marker may appear anywhere in the line. Angle-bracket includes and
/// lines with fewer than two double quotes are plain. Bytes outside UTF-8
/// are fine anywhere in the line.
pub fn classify_line(line: &[u8]) -> Line<'_> {
    if !line.contains_str(INCLUDE_MARKER) {
        return Line::Plain(line.as_bstr());
    }
    match (line.find_byte(b'"'), line.rfind_byte(b'"')) {
        (Some(open), Some(close)) if open < close => Line::Include {
            path: line[open + 1..close].as_bstr(),
        },
        _ => Line::Plain(line.as_bstr()),
    }
}
