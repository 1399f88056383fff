use crate::io::error::Error;
use crate::model::molecule::Molecule;
use std::io::BufRead;

/// Number of leading lines ignored as the header block.
const HEADER_LINES: usize = 3;

/// Reads a line-indexed structure block into a fresh molecule.
///
/// Layout: three ignored header lines; a counts line declaring the number of atom and
/// bond lines that follow; the atom lines; the bond lines; then an optional terminator
/// line whose tokens include `END`. Every structural violation surfaces as the single
/// [`Error::Malformed`] kind and no partial molecule is returned.
pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let mut molecule = Molecule::new();
    let mut counts: Option<(usize, usize)> = None;
    let mut lines_seen = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        lines_seen = line_number;
        let line = line?;

        if line_number <= HEADER_LINES {
            continue;
        }

        if line_number == HEADER_LINES + 1 {
            counts = Some(parse_counts(&line, line_number)?);
            continue;
        }

        // Beyond the counts line, `counts` is always set.
        let Some((atom_count, bond_count)) = counts else {
            break;
        };
        let atoms_end = HEADER_LINES + 1 + atom_count;
        let bonds_end = atoms_end + bond_count;

        if line_number <= atoms_end {
            parse_atom_line(&line, line_number, &mut molecule)?;
        } else if line_number <= bonds_end {
            parse_bond_line(&line, line_number, &mut molecule)?;
        } else if is_end_marker(&line) {
            break;
        } else {
            return Err(Error::malformed(
                line_number,
                "unexpected content after the declared atom and bond lines",
            ));
        }
    }

    let (atom_count, bond_count) = counts.ok_or_else(|| {
        Error::malformed(
            lines_seen + 1,
            "structure block ended before the counts line",
        )
    })?;

    if molecule.atom_count() < atom_count || molecule.bond_count() < bond_count {
        return Err(Error::malformed(
            lines_seen,
            format!(
                "structure block declared {} atoms and {} bonds but ended after {} and {}",
                atom_count,
                bond_count,
                molecule.atom_count(),
                molecule.bond_count()
            ),
        ));
    }

    log::debug!(
        "parsed molecule with {} atoms and {} bonds",
        molecule.atom_count(),
        molecule.bond_count()
    );

    Ok(molecule)
}

fn parse_counts(line: &str, line_number: usize) -> Result<(usize, usize), Error> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(Error::malformed(
            line_number,
            "counts line must declare the atom and bond counts",
        ));
    }

    let atoms = fields[0]
        .parse::<usize>()
        .map_err(|_| Error::malformed(line_number, "invalid atom count"))?;
    let bonds = fields[1]
        .parse::<usize>()
        .map_err(|_| Error::malformed(line_number, "invalid bond count"))?;
    Ok((atoms, bonds))
}

fn parse_atom_line(line: &str, line_number: usize, molecule: &mut Molecule) -> Result<(), Error> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(Error::malformed(
            line_number,
            "atom line must contain x, y, z and an element code",
        ));
    }

    let x = fields[0]
        .parse::<f64>()
        .map_err(|_| Error::malformed(line_number, "invalid x coordinate in atom line"))?;
    let y = fields[1]
        .parse::<f64>()
        .map_err(|_| Error::malformed(line_number, "invalid y coordinate in atom line"))?;
    let z = fields[2]
        .parse::<f64>()
        .map_err(|_| Error::malformed(line_number, "invalid z coordinate in atom line"))?;

    molecule.append_atom(fields[3], x, y, z);
    Ok(())
}

fn parse_bond_line(line: &str, line_number: usize, molecule: &mut Molecule) -> Result<(), Error> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(Error::malformed(
            line_number,
            "bond line must contain two atom indices and an electron-pair count",
        ));
    }

    let a1 = fields[0]
        .parse::<usize>()
        .map_err(|_| Error::malformed(line_number, "invalid first atom index in bond line"))?;
    let a2 = fields[1]
        .parse::<usize>()
        .map_err(|_| Error::malformed(line_number, "invalid second atom index in bond line"))?;
    let epairs = fields[2]
        .parse::<u8>()
        .map_err(|_| Error::malformed(line_number, "invalid electron-pair count in bond line"))?;

    // Indices are 1-based on the wire.
    if a1 == 0 || a2 == 0 || a1 > molecule.atom_count() || a2 > molecule.atom_count() {
        return Err(Error::malformed(
            line_number,
            "bond references atom outside declared range",
        ));
    }

    molecule
        .append_bond(a1 - 1, a2 - 1, epairs)
        .map_err(|e| Error::malformed(line_number, e.to_string()))?;
    Ok(())
}

fn is_end_marker(line: &str) -> bool {
    line.split_whitespace().any(|token| token == "END")
}

#[cfg(test)]
mod tests {
    use super::read;
    use crate::io::error::Error;

    fn parse(input: &str) -> Result<crate::model::molecule::Molecule, Error> {
        read(input.as_bytes())
    }

    #[test]
    fn reads_single_atom_molecule() {
        let input = "\n\n\n1 0\n0.0000 0.0000 0.0000 C\nEND\n";

        let molecule = parse(input).unwrap();

        assert_eq!(molecule.atom_count(), 1);
        assert_eq!(molecule.bond_count(), 0);
        let atom = molecule.atom(0).unwrap();
        assert_eq!(atom.element, "C");
        assert_eq!((atom.pos.x, atom.pos.y, atom.pos.z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn reads_atoms_and_bonds_with_one_based_indices() {
        let input = "\n\n\n3 2\n0.0 0.0 0.0 O\n0.76 0.59 0.0 H\n-0.76 0.59 0.0 H\n1 2 1\n1 3 1\nM END\n";

        let molecule = parse(input).unwrap();

        assert_eq!(molecule.atom_count(), 3);
        assert_eq!(molecule.bond_count(), 2);
        let bond = molecule.bond(0).unwrap();
        assert_eq!((bond.a1, bond.a2, bond.epairs), (0, 1, 1));
    }

    #[test]
    fn ignores_extra_fields_on_counts_atom_and_bond_lines() {
        let input = "\n\n\n2 1 0 0 V2000\n0.0 0.0 0.0 C 0 0\n1.0 0.0 0.0 C 0 0\n1 2 1 0\nM END\n";

        let molecule = parse(input).unwrap();

        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.bond_count(), 1);
    }

    #[test]
    fn accepts_end_of_input_without_terminator() {
        let input = "\n\n\n1 0\n0.0 0.0 0.0 C\n";

        assert!(parse(input).is_ok());
    }

    #[test]
    fn rejects_missing_atom_line() {
        // Two atoms declared, one present; the terminator lands in the atom block.
        let input = "\n\n\n2 0\n0.0 0.0 0.0 C\nEND\n";

        let err = parse(input).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn rejects_truncated_bond_block() {
        let input = "\n\n\n2 1\n0.0 0.0 0.0 C\n1.0 0.0 0.0 C\n";

        let err = parse(input).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn rejects_unparsable_coordinate() {
        let input = "\n\n\n1 0\nabc 0.0 0.0 C\nEND\n";

        let err = parse(input).unwrap_err();
        assert!(matches!(
            err,
            Error::Malformed { line_number: 5, .. }
        ));
    }

    #[test]
    fn rejects_bond_referencing_missing_atom() {
        let input = "\n\n\n2 1\n0.0 0.0 0.0 C\n1.0 0.0 0.0 C\n1 3 1\nEND\n";

        let err = parse(input).unwrap_err();
        assert!(matches!(
            err,
            Error::Malformed { line_number: 7, .. }
        ));
    }

    #[test]
    fn rejects_zero_bond_index() {
        let input = "\n\n\n2 1\n0.0 0.0 0.0 C\n1.0 0.0 0.0 C\n0 2 1\nEND\n";

        assert!(parse(input).is_err());
    }

    #[test]
    fn rejects_trailing_content_that_is_not_the_terminator() {
        let input = "\n\n\n1 0\n0.0 0.0 0.0 C\nsomething else\n";

        let err = parse(input).unwrap_err();
        assert!(matches!(
            err,
            Error::Malformed { line_number: 6, .. }
        ));
    }

    #[test]
    fn stops_reading_at_the_terminator() {
        // Content after END belongs to the next block and must not fail this one.
        let input = "\n\n\n1 0\n0.0 0.0 0.0 C\nM END\n> <extra>\ndata\n";

        assert!(parse(input).is_ok());
    }

    #[test]
    fn rejects_input_shorter_than_the_counts_line() {
        let input = "only\ntwo\n";

        let err = parse(input).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn rejects_negative_electron_pair_count() {
        let input = "\n\n\n2 1\n0.0 0.0 0.0 C\n1.0 0.0 0.0 C\n1 2 -1\nEND\n";

        assert!(parse(input).is_err());
    }
}
