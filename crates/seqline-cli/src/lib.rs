//! CLI logic for the Seqline diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use seqline::{DiagramBuilder, SeqlineError};

/// Run the Seqline CLI application
///
/// Reads the input file, renders it and writes the SVG document to the
/// output file, or to stdout when no output file is given. Nothing is
/// written when any stage fails.
///
/// # Errors
///
/// Returns `SeqlineError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SeqlineError> {
    info!(input_path = args.input, output_path:? = args.output; "Processing diagram");

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let sequence = builder.parse(&source)?;
    let svg = builder.render_svg(&sequence)?;

    match &args.output {
        Some(output) => {
            fs::write(output, svg)?;
            info!(output_file = output; "SVG exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
