//! Command-line arguments of the `seqline` binary.

use clap::Parser;

/// Render a sequence diagram description to SVG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram file
    #[arg(short, long)]
    pub input: String,

    /// Path to the output SVG file; the document goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_required() {
        let result = Args::try_parse_from(["seqline"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from(["seqline", "-i", "in.cfg", "-o", "out.svg"]).unwrap();
        assert_eq!(args.input, "in.cfg");
        assert_eq!(args.output.as_deref(), Some("out.svg"));
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_output_defaults_to_stdout() {
        let args = Args::try_parse_from(["seqline", "--input", "in.cfg"]).unwrap();
        assert!(args.output.is_none());
    }
}
