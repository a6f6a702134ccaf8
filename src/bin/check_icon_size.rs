use std::process::ExitCode;

/// Prints the source artwork's pixel dimensions without touching anything.
fn main() -> ExitCode {
    match image::open("public/dodoroi_icon.png") {
        Ok(img) => {
            println!("Original dimensions: {}x{}", img.width(), img.height());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to read icon: {}", err);
            ExitCode::FAILURE
        }
    }
}
