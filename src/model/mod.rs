pub mod atom;
pub mod bond;
pub mod error;
pub mod molecule;
pub mod types;
