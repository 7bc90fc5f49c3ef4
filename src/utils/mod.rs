pub mod fs;

pub use fs::{overwrite_existing, read_file_to_string};
