//! Source excerpts for diagnostics.
//!
//! Renders a window of lines around the offending location, marks the target
//! line, and draws a caret beneath the offending column when it is known.
//!
//! ```text
//!      1 x: uint256
//! ---> 2 y: uint256 = x +
//! ------------------------^
//!      3 z: bool
//! ```

use tracing::debug;

/// Gutter prefix that distinguishes the target line when numbering lines.
const TARGET_GUTTER: &str = "---> ";

/// Renders annotated excerpts with a fixed window size and numbering mode.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceAnnotator {
    /// Lines of context shown above and below the target line.
    pub context_lines: usize,
    /// Prefix each emitted line with its 1-based line number.
    pub show_line_numbers: bool,
}

impl SourceAnnotator {
    pub const fn new(context_lines: usize, show_line_numbers: bool) -> Self {
        SourceAnnotator {
            context_lines,
            show_line_numbers,
        }
    }

    /// Annotate `source` at `line` (1-based) and optional `column`.
    ///
    /// Returns `None` if `line` does not exist in `source`.
    pub fn annotate(&self, source: &str, line: u32, column: Option<u32>) -> Option<String> {
        annotate_source(
            source,
            line,
            column,
            self.context_lines,
            self.show_line_numbers,
        )
    }
}

/// Produce an excerpt of `source` highlighting `line` and `column`.
///
/// Lines break at `\n`, `\r\n` or a lone `\r`. At most `context_lines` lines
/// are shown on either side of the target, clamped to the buffer. The target
/// line is followed by a marker of `column` dashes and a caret, the dash run
/// capped one past the end of the line. With no column only the line is
/// marked: by the gutter when numbering, otherwise by a `---> ` prefix.
/// Trailing whitespace is stripped from every emitted line and from the end
/// of the excerpt.
///
/// Returns `None` when `line` is `0` or past the last line.
pub fn annotate_source(
    source: &str,
    line: u32,
    column: Option<u32>,
    context_lines: usize,
    show_line_numbers: bool,
) -> Option<String> {
    let lines = split_lines(source);
    let Some(target) = (line as usize)
        .checked_sub(1)
        .filter(|&idx| idx < lines.len())
    else {
        debug!(line, total = lines.len(), "annotation target outside source");
        return None;
    };

    let start = target.saturating_sub(context_lines);
    let end = target
        .saturating_add(context_lines)
        .saturating_add(1)
        .min(lines.len());
    let line_len = lines[target].chars().count();
    let caret = column.map(|column| {
        let dashes = (column as usize).min(line_len + 1);
        format!("{}^", "-".repeat(dashes))
    });

    let gutters: Vec<String> = if show_line_numbers {
        (start..end)
            .map(|idx| {
                if idx == target {
                    format!("{TARGET_GUTTER}{} ", idx + 1)
                } else {
                    format!("{} ", idx + 1)
                }
            })
            .collect()
    } else if caret.is_none() {
        (start..end)
            .map(|idx| (if idx == target { TARGET_GUTTER } else { "" }).to_owned())
            .collect()
    } else {
        Vec::new()
    };
    let width = gutters.iter().map(String::len).max().unwrap_or(0);

    let mut excerpt: Vec<String> = Vec::with_capacity(end - start + 1);
    for (offset, text) in lines[start..end].iter().enumerate() {
        let gutter = gutters.get(offset).map_or("", String::as_str);
        excerpt.push(format!("{gutter:>width$}{text}").trim_end().to_owned());

        if start + offset == target {
            if let Some(caret) = &caret {
                excerpt.push(format!("{}{caret}", "-".repeat(width)));
            }
        }
    }

    let mut excerpt = excerpt.join("\n");
    excerpt.truncate(excerpt.trim_end().len());
    Some(excerpt)
}

/// Split `source` into lines the way the host parser counts them.
fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = source;
    while !rest.is_empty() {
        let Some(idx) = rest.find(|c: char| c == '\n' || c == '\r') else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..idx]);
        let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + skip..];
    }
    lines
}
