use image::imageops::FilterType;
use std::process::ExitCode;

const ICON_PATH: &str = "public/dodoroi_icon.png";

/// Upscales the source artwork in place to 512x512 with nearest-neighbor
/// resampling, which keeps the pixel-art edges sharp.
fn main() -> ExitCode {
    match upscale() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("failed to upscale icon: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn upscale() -> Result<(), Box<dyn std::error::Error>> {
    let img = image::open(ICON_PATH)?;
    println!("Original dimensions: {}x{}", img.width(), img.height());

    img.resize_exact(512, 512, FilterType::Nearest).save(ICON_PATH)?;
    println!("Icon upscaled (nearest neighbor) and saved to {}", ICON_PATH);
    Ok(())
}
