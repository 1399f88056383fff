use std::fs::File;
use std::io::{self as stdio, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use molsvg::io::read_sdf_molecule;
use molsvg::Molecule;

pub mod info;
pub mod render;

/// Aggregated IO parameters shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct IoParameters {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Loads a molecule from the configured input source.
pub fn load_input(params: &IoParameters) -> Result<Molecule> {
    let molecule = if let Some(path) = &params.input {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        read_sdf_molecule(BufReader::new(file))
            .with_context(|| format!("Failed to parse structure input from {}", path.display()))?
    } else {
        let stdin = stdio::stdin();
        read_sdf_molecule(BufReader::new(stdin.lock()))
            .context("Failed to parse structure input from stdin")?
    };

    Ok(molecule)
}

/// Writes text output to the configured destination.
pub fn save_output(params: &IoParameters, contents: &str) -> Result<()> {
    match &params.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            writer.flush().context("Failed to flush output writer")?;
        }
        None => {
            let stdout = stdio::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(contents.as_bytes())
                .context("Failed to write output to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}
