use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;

use crate::commands::{load_input, save_output, IoParameters};

/// Summarizes the parsed molecule.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// List every atom and bond instead of just the totals.
    #[arg(long)]
    pub detailed: bool,
}

/// Prints atom/bond totals, an element tally, and optionally the full listing.
pub fn run(io_params: &IoParameters, args: &InfoArgs) -> Result<()> {
    let molecule = load_input(io_params)?;

    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for atom in molecule.atoms() {
        *tally.entry(atom.element.as_str()).or_insert(0) += 1;
    }

    let mut report = String::new();
    let _ = writeln!(report, "atoms: {}", molecule.atom_count());
    let _ = writeln!(report, "bonds: {}", molecule.bond_count());
    for (element, count) in &tally {
        let _ = writeln!(report, "  {}: {}", element, count);
    }

    if args.detailed {
        for atom in molecule.atoms() {
            let _ = writeln!(report, "{}", atom);
        }
        for bond in molecule.bonds() {
            let _ = writeln!(report, "{}", bond);
        }
    }

    save_output(io_params, &report)
}
