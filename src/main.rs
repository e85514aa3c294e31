use std::process;

fn main() {
    if let Err(e) = question_index::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
