pub mod probe;
pub mod whole_file;
