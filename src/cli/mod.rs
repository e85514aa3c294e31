pub mod commands;

pub use commands::{Cli, DEFAULT_QUESTIONS_DIR, rebuild, run};
