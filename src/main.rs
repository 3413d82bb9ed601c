//! bookdeal - query books, authors and their contracts

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = bookdeal_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
