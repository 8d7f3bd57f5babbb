//! Shader minification API

use crate::scan::{Fragment, ScanState, scan_line, source_lines};

/// Size and shape of a minification run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinifyStats {
    /// Number of lines in the input
    pub input_lines: usize,
    /// Number of lines in the output
    pub output_lines: usize,
    /// Number of preprocessor directives kept
    pub directives: usize,
    /// Input size in bytes
    pub input_bytes: usize,
    /// Output size in bytes
    pub output_bytes: usize,
    /// Input ended inside a block comment that was never closed
    pub unterminated_comment: bool,
}

impl MinifyStats {
    /// Number of bytes removed
    pub fn saved(&self) -> usize {
        self.input_bytes.saturating_sub(self.output_bytes)
    }
}

/// Result of minifying shader source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyResult {
    /// The minified source
    pub source: String,
    /// Statistics about the run
    pub stats: MinifyStats,
}

/// Completed output lines plus the run of code not yet flushed.
#[derive(Default)]
struct Output {
    lines: Vec<String>,
    pending: String,
    directives: usize,
}

impl Output {
    fn push(&mut self, fragment: Fragment<'_>) {
        match fragment {
            Fragment::Directive(directive) => {
                self.flush();
                self.lines.push(directive.into_owned());
                self.directives += 1;
            }
            Fragment::Code(code) => self.pending.push_str(&code),
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.lines.push(std::mem::take(&mut self.pending));
        }
    }

    fn finish(mut self) -> (String, usize, usize) {
        self.flush();
        (self.lines.join("\n"), self.lines.len(), self.directives)
    }
}

/// Minifies shader source and reports what happened.
///
/// See [`minify`] for the transformation rules.
pub fn minify_with_stats(source: &str) -> MinifyResult {
    let (state, output, input_lines) = source_lines(source).fold(
        (ScanState::Normal, Output::default(), 0usize),
        |(state, mut output, count), line| {
            let (state, fragment) = scan_line(state, line);
            if let Some(fragment) = fragment {
                output.push(fragment);
            }
            (state, output, count + 1)
        },
    );

    let (minified, output_lines, directives) = output.finish();

    let stats = MinifyStats {
        input_lines,
        output_lines,
        directives,
        input_bytes: source.len(),
        output_bytes: minified.len(),
        unterminated_comment: state.in_block_comment(),
    };

    if stats.unterminated_comment {
        tracing::warn!("block comment not closed before end of input; trailing lines dropped");
    }
    tracing::debug!(
        input_lines = stats.input_lines,
        output_lines = stats.output_lines,
        directives = stats.directives,
        input_bytes = stats.input_bytes,
        output_bytes = stats.output_bytes,
        "minified shader source"
    );

    MinifyResult {
        source: minified,
        stats,
    }
}

/// Minifies shader source by removing comments, blank lines and line breaks.
///
/// Ordinary code lines are trimmed and concatenated with no separator.
/// Preprocessor directives (lines starting with `#`) each keep a line of
/// their own, so a directive splits the surrounding code into separate
/// output lines. Output lines are joined with `\n` and the result never ends
/// with a newline.
///
/// This never fails. An unterminated `/*` silently swallows the rest of the
/// input.
///
/// Concatenation is purely textual: a line ending in an identifier followed
/// by a line starting with one will fuse both into a single token.
///
/// # Example
/// ```
/// use shadermin::minify;
///
/// let source = r#"
///     #version 330 core
///     // Vertex position
///     layout(location = 0) in vec3 aPos;
///     void main() {
///         gl_Position = vec4(aPos, 1.0); /* clip space */
///     }
/// "#;
///
/// assert_eq!(
///     minify(source),
///     "#version 330 core\nlayout(location = 0) in vec3 aPos;void main() {gl_Position = vec4(aPos, 1.0);}"
/// );
/// ```
pub fn minify(source: &str) -> String {
    minify_with_stats(source).source
}
