mod error;
mod sdf;

pub use error::Error;

pub use sdf::reader::read as read_sdf_molecule;
