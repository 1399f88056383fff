use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error while reading structure data: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed structure data: {details} (line {line_number})")]
    Malformed {
        line_number: usize,
        details: String,
    },
}

impl Error {
    pub fn malformed(line_number: usize, details: impl Into<String>) -> Self {
        Self::Malformed {
            line_number,
            details: details.into(),
        }
    }
}
