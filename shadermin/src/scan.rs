//! Line scanner: comment stripping and directive detection for a single line

use std::borrow::Cow;

const BLOCK_START: &str = "/*";
const BLOCK_END: &str = "*/";
const LINE_COMMENT: &str = "//";
const DIRECTIVE: char = '#';

/// Iterator over the lines of a shader source.
///
/// Created by [`source_lines`].
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    rest: &'a str,
}

/// Splits shader source into lines.
///
/// Accepts `\n`, `\r\n` and a bare `\r`, along with the other Unicode line
/// boundaries (`\x0b`, `\x0c`, `\x1c`-`\x1e`, `\u{85}`, `\u{2028}`,
/// `\u{2029}`). Terminators are not included in the returned lines, and a
/// terminator at the very end does not start an extra empty line.
///
/// # Example
/// ```
/// use shadermin::source_lines;
///
/// let lines: Vec<&str> = source_lines("#version 330\rfloat a;\r\nfloat b;\n").collect();
/// assert_eq!(lines, ["#version 330", "float a;", "float b;"]);
/// ```
pub fn source_lines(source: &str) -> SourceLines<'_> {
    SourceLines { rest: source }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((index, c)) = self.rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            return Some(std::mem::take(&mut self.rest));
        };

        let line = &self.rest[..index];
        let mut end = index + c.len_utf8();
        if c == '\r' && self.rest[end..].starts_with('\n') {
            end += 1;
        }
        self.rest = &self.rest[end..];
        Some(line)
    }
}

/// Comment state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanState {
    /// Outside any comment
    #[default]
    Normal,
    /// Inside a `/*` that has not been closed yet
    InBlockComment,
}

impl ScanState {
    /// Returns true if a block comment is still open
    #[inline]
    pub fn in_block_comment(&self) -> bool {
        matches!(self, ScanState::InBlockComment)
    }
}

/// What a single source line contributes to the output once comments and
/// surrounding whitespace are gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Ordinary code, merged with neighbouring code lines
    Code(Cow<'a, str>),
    /// Preprocessor directive, always emitted on its own line
    Directive(Cow<'a, str>),
}

impl Fragment<'_> {
    /// Returns the text of the fragment
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Code(text) | Fragment::Directive(text) => text,
        }
    }

    /// Returns true for preprocessor directives
    #[inline]
    pub fn is_directive(&self) -> bool {
        matches!(self, Fragment::Directive(_))
    }
}

/// Scans one line of shader source.
///
/// Takes the comment state left by the previous line and returns the state
/// for the next one, together with the line's contribution (if any).
/// Lines that are blank, or blank once comments are removed, contribute
/// nothing.
///
/// Only the first `/*` on a line is considered. A `/*` is recognised even
/// when it follows a `//` on the same line.
///
/// # Example
/// ```
/// use shadermin::{Fragment, ScanState, scan_line};
///
/// let (state, fragment) = scan_line(ScanState::Normal, "  vec3 n; /* normal");
/// assert_eq!(state, ScanState::InBlockComment);
/// assert_eq!(fragment.unwrap().as_str(), "vec3 n;");
///
/// let (state, fragment) = scan_line(state, "still comment */ #define X 1");
/// assert_eq!(state, ScanState::Normal);
/// assert!(matches!(fragment, Some(Fragment::Directive(_))));
/// ```
pub fn scan_line(state: ScanState, line: &str) -> (ScanState, Option<Fragment<'_>>) {
    let line = match state {
        ScanState::InBlockComment => match line.find(BLOCK_END) {
            Some(end) => &line[end + BLOCK_END.len()..],
            None => return (ScanState::InBlockComment, None),
        },
        ScanState::Normal => line,
    };

    let (line, state) = strip_block_comment(line);
    (state, classify(line))
}

/// Removes the first block comment on the line, or everything from an
/// unterminated `/*` onwards.
fn strip_block_comment(line: &str) -> (Cow<'_, str>, ScanState) {
    let Some(start) = line.find(BLOCK_START) else {
        return (Cow::Borrowed(line), ScanState::Normal);
    };

    // The closing marker may not overlap the opening one: `/*/` stays open.
    let body = start + BLOCK_START.len();
    match line[body..].find(BLOCK_END) {
        Some(end) => {
            let rest = &line[body + end + BLOCK_END.len()..];
            let mut spliced = String::with_capacity(start + rest.len());
            spliced.push_str(&line[..start]);
            spliced.push_str(rest);
            (Cow::Owned(spliced), ScanState::Normal)
        }
        None => (Cow::Borrowed(&line[..start]), ScanState::InBlockComment),
    }
}

fn classify(line: Cow<'_, str>) -> Option<Fragment<'_>> {
    let code = match line {
        Cow::Borrowed(line) => Cow::Borrowed(code_span(line)?),
        Cow::Owned(line) => Cow::Owned(code_span(&line)?.to_owned()),
    };

    if code.starts_with(DIRECTIVE) {
        Some(Fragment::Directive(code))
    } else {
        Some(Fragment::Code(code))
    }
}

/// Trims the line and cuts off any line comment. Returns `None` when nothing
/// but whitespace or a comment remains.
fn code_span(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with(LINE_COMMENT) {
        return None;
    }

    let code = match line.find(LINE_COMMENT) {
        Some(index) => &line[..index],
        None => line,
    };
    Some(code.trim_end())
}
