use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("bond references atom index {index} outside the valid range (atom count {atom_count})")]
    InvalidReference { index: usize, atom_count: usize },

    #[error("{kind} index {index} is out of range (count {count})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        count: usize,
    },
}

impl Error {
    pub fn invalid_reference(index: usize, atom_count: usize) -> Self {
        Self::InvalidReference { index, atom_count }
    }

    pub fn index_out_of_range(kind: &'static str, index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { kind, index, count }
    }
}
