//! CLI logic for the mermaid-lite diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use mermaid_lite::{DiagramBuilder, MermaidError, render_fenced_block};

/// Run the mermaid-lite CLI application
///
/// Reads the input file, renders it and writes the SVG to the output file.
/// With `--fallback`, unrenderable input is written as an escaped HTML code
/// block instead of failing.
///
/// # Errors
///
/// Returns `MermaidError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors (unless `--fallback` is set)
/// - Layout and rendering errors
pub fn run(args: &Args) -> Result<(), MermaidError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let output = if args.fallback {
        render_fenced_block(&source)
    } else {
        let builder = DiagramBuilder::new(app_config);
        let diagram = builder.parse(&source)?;
        builder.render_svg(&diagram)?.into_svg()
    };

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Output written successfully");

    Ok(())
}
