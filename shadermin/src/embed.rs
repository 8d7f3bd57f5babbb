//! Rendering minified shaders as C source for embedding

use crate::{Error, Result};

/// Renders `text` as a C character array definition.
///
/// The output has the form `const char SYMBOL[] = "...";` followed by a
/// newline, with the text escaped as a C string literal.
///
/// # Example
/// ```
/// use shadermin::embed_c_array;
///
/// let code = embed_c_array("FS_CODE_BLUR", "#version 330\nout vec4 c;").unwrap();
/// assert_eq!(code, "const char FS_CODE_BLUR[] = \"#version 330\\nout vec4 c;\";\n");
/// ```
pub fn embed_c_array(symbol: &str, text: &str) -> Result<String> {
    if !is_c_identifier(symbol) {
        return Err(Error::InvalidSymbol(symbol.to_string()));
    }

    let mut out = String::with_capacity(text.len() + symbol.len() + 24);
    out.push_str("const char ");
    out.push_str(symbol);
    out.push_str("[] = \"");
    escape_into(&mut out, text);
    out.push_str("\";\n");
    Ok(out)
}

fn is_c_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Octal rather than hex: `\x` would swallow following hex digits.
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
}
