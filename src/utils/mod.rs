pub mod paths;
pub mod terminal;

pub use paths::{
    INDEX_FILE_NAME, METADATA_FILE_NAME, index_path, metadata_path, validate_file_size,
    validate_identifier,
};
pub use terminal::single_line;
