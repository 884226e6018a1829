//! Launch the standalone TUI or GUI binaries.

use std::process::Command;

use md_deck::SourceOptions;

/// Run `binary` with the source flags passed through.
pub fn run(binary: &str, crate_dir: &str, options: &SourceOptions) -> Result<(), String> {
    let status = Command::new(binary).args(options.to_args()).status();

    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("{binary} exited with {s}")),
        Err(_) => Err(format!(
            "{binary} binary not found. Install with: cargo install --path crates/{crate_dir}"
        )),
    }
}
