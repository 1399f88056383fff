use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use molsvg::render::render_molecule;
use molsvg::{StyleSheet, Transform};

use crate::commands::{load_input, save_output, IoParameters};

/// Renders the molecule as an SVG document.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Rotation about the x-axis (degrees), applied first.
    #[arg(long, value_name = "DEG", default_value_t = 0.0)]
    pub pitch: f64,
    /// Rotation about the y-axis (degrees), applied second.
    #[arg(long, value_name = "DEG", default_value_t = 0.0)]
    pub yaw: f64,
    /// Rotation about the z-axis (degrees), applied third.
    #[arg(long, value_name = "DEG", default_value_t = 0.0)]
    pub roll: f64,
    /// Element style table (TOML). The builtin table is used when omitted.
    #[arg(long, value_name = "FILE")]
    pub styles: Option<PathBuf>,
}

/// Executes the full render pipeline: parse, rotate, sort, composite, emit.
pub fn run(io_params: &IoParameters, args: &RenderArgs) -> Result<()> {
    let mut molecule = load_input(io_params)?;
    let styles = load_styles(args)?;

    Transform::rotate(&mut molecule, args.pitch, args.yaw, args.roll);
    molecule.sort_by_z();

    let document = render_molecule(&molecule, &styles);
    save_output(io_params, &document)
}

fn load_styles(args: &RenderArgs) -> Result<StyleSheet> {
    match &args.styles {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read style table {}", path.display()))?;
            StyleSheet::from_toml_str(&source)
                .with_context(|| format!("Failed to parse style table {}", path.display()))
        }
        None => Ok(StyleSheet::builtin()),
    }
}
