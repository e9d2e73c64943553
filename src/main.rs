//! Scipio - build options and version stamping for prebuilt XCFrameworks.
//!
//! This binary composes canonical build options from `scipio.toml` and
//! command line flags, and generates the version source of the tool.

use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match scipio_kit::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
