//! Line sources for dataset processing
//!
//! This crate provides streaming line readers for delimited text
//! datasets, with transparent gzip decompression for large files.

pub mod error;
pub mod lines;
pub mod reader;
pub mod record;

pub use error::{Error, Result};
pub use reader::{open_lines, LineSource};
pub use record::Record;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
