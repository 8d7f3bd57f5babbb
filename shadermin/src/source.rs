//! Loading shader source from disk

use crate::{Error, MinifyResult, Result, minify_with_stats};
use std::io::ErrorKind;
use std::path::Path;

/// Reads a shader source file as UTF-8 text.
///
/// A missing file is reported as [`Error::NotFound`]; any other failure,
/// including invalid UTF-8, as [`Error::Io`].
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading shader source");

    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Reads and minifies a shader source file.
///
/// # Example
/// ```no_run
/// use shadermin::minify_file;
///
/// let result = minify_file("shaders/material.frag").unwrap();
/// println!("{} -> {} bytes", result.stats.input_bytes, result.stats.output_bytes);
/// ```
pub fn minify_file(path: impl AsRef<Path>) -> Result<MinifyResult> {
    let source = read_source(path)?;
    Ok(minify_with_stats(&source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("shadermin-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = temp_path("does-not-exist.glsl");
        match read_source(&path) {
            Err(Error::NotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let path = temp_path("invalid.glsl");
        std::fs::write(&path, [0x66, 0xff, 0xfe, 0x0a]).unwrap();

        let result = read_source(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_minify_file() {
        let path = temp_path("blur.frag");
        std::fs::write(&path, "#version 330\n\n// blur\nout vec4 c;\nvoid main() { c = vec4(0); }\n")
            .unwrap();

        let result = minify_file(&path);
        std::fs::remove_file(&path).unwrap();

        let result = result.unwrap();
        assert_eq!(result.source, "#version 330\nout vec4 c;void main() { c = vec4(0); }");
        assert_eq!(result.stats.input_lines, 5);
    }
}
