mod generate;
mod models;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Regenerates the full Tauri icon set from the source artwork. Paths are
/// fixed; run it from the repository root.
fn main() -> ExitCode {
    let source = Path::new(models::SOURCE_ICON);
    let out_dir = Path::new(models::ICON_DIR);

    if let Err(err) = fs::create_dir_all(out_dir) {
        eprintln!("failed to create {}: {}", out_dir.display(), err);
        return ExitCode::FAILURE;
    }

    match generate::generate_all(source, out_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("icon generation failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
