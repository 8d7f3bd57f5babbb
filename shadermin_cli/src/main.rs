//! Shader minifier command-line tool

use clap::Parser;
use shadermin::{embed_c_array, minify_file};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "SHADERMIN_LOG";

#[derive(Parser)]
#[command(name = "shadermin")]
#[command(about = "Strip comments and whitespace from shader source", long_about = None)]
struct Cli {
    /// Input shader file
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit a C array definition with this symbol name instead of raw source
    #[arg(long, value_name = "SYMBOL")]
    embed: Option<String>,

    /// Print a size summary to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Writes `text` verbatim, without appending a newline.
fn write_output(writer: &mut impl Write, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

fn minify_shader(
    input: PathBuf,
    output: Option<PathBuf>,
    embed: Option<String>,
    verbose: bool,
) -> Result<(), String> {
    let result = minify_file(&input).map_err(|e| format!("{}", e))?;

    let text = match embed {
        Some(symbol) => embed_c_array(&symbol, &result.source).map_err(|e| format!("{}", e))?,
        None => result.source,
    };

    if let Some(output) = &output {
        std::fs::write(output, text.as_bytes())
            .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
    } else {
        write_output(&mut std::io::stdout().lock(), &text)
            .map_err(|e| format!("Failed to write to stdout: {}", e))?;
    }

    let stats = result.stats;
    tracing::info!(
        input = %input.display(),
        input_bytes = stats.input_bytes,
        output_bytes = stats.output_bytes,
        "minified"
    );

    if verbose {
        let target = output
            .as_ref()
            .map(|o| format!(" -> {}", o.display()))
            .unwrap_or_default();
        eprintln!(
            "Minified {}{} ({} -> {} bytes, saved {})",
            input.display(),
            target,
            stats.input_bytes,
            stats.output_bytes,
            stats.saved()
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = minify_shader(cli.input, cli.output, cli.embed, cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["shadermin"]).is_err());
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "shadermin",
            "blur.frag",
            "-o",
            "blur.min.frag",
            "--embed",
            "FS_CODE_BLUR",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.input, PathBuf::from("blur.frag"));
        assert_eq!(cli.output, Some(PathBuf::from("blur.min.frag")));
        assert_eq!(cli.embed.as_deref(), Some("FS_CODE_BLUR"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_write_output_is_verbatim() {
        let text = shadermin::minify("#version 330\n// color\nout vec4 c;\n\n");
        let mut buffer = Vec::new();
        write_output(&mut buffer, &text).unwrap();
        assert_eq!(buffer, b"#version 330\nout vec4 c;");
    }

    #[test]
    fn test_write_output_embedded() {
        let text = embed_c_array("VS_CODE_QUAD", "#version 330\nin vec3 p;").unwrap();
        let mut buffer = Vec::new();
        write_output(&mut buffer, &text).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "const char VS_CODE_QUAD[] = \"#version 330\\nin vec3 p;\";\n"
        );
    }

    #[test]
    fn test_missing_input_reports_path() {
        let input = std::env::temp_dir().join("shadermin-cli-missing.glsl");
        let err = minify_shader(input.clone(), None, None, false).unwrap_err();
        assert_eq!(err, format!("File not found [{}]", input.display()));
    }

    #[test]
    fn test_writes_output_file() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("shadermin-cli-{}.vert", std::process::id()));
        let output = dir.join(format!("shadermin-cli-{}.min.vert", std::process::id()));
        std::fs::write(&input, "#version 330\n// pos\nin vec3 p;\n").unwrap();

        let result = minify_shader(input.clone(), Some(output.clone()), None, false);
        let written = std::fs::read_to_string(&output);
        std::fs::remove_file(&input).unwrap();
        let _ = std::fs::remove_file(&output);

        assert_eq!(result, Ok(()));
        assert_eq!(written.unwrap(), "#version 330\nin vec3 p;");
    }
}
