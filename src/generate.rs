use crate::models::{
    CORE_SIZES, ICO_NAME, ICO_SIZES, MAIN_ICON_NAME, MAIN_ICON_SIZE, RETINA_NAME, RETINA_SIZE,
    WINDOWS_LOGOS,
};
use ico::{IconDir, IconDirEntry, IconImage};
use image::DynamicImage;
use image::imageops::FilterType;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Loads the source artwork. A missing or undecodable file is fatal for the
/// whole run; nothing has been written at this point.
pub fn load_source(path: &Path) -> Result<DynamicImage, Box<dyn std::error::Error>> {
    let img = image::open(path)?;
    Ok(img)
}

/// Resizes to exact pixel dimensions with Lanczos resampling. Targets are all
/// square; a non-square source gets stretched rather than letterboxed.
fn resize(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize_exact(size, size, FilterType::Lanczos3)
}

/// Writes the four standalone `{size}x{size}.png` files plus the retina
/// `128x128@2x.png` variant. Any failure aborts the run.
pub fn write_core_pngs(
    img: &DynamicImage,
    out_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    for &size in &CORE_SIZES {
        let name = format!("{}x{}.png", size, size);
        resize(img, size).save(out_dir.join(&name))?;
        println!("{} generated", name);
    }

    resize(img, RETINA_SIZE).save(out_dir.join(RETINA_NAME))?;
    println!("{} generated", RETINA_NAME);
    Ok(())
}

/// Encodes all six ICO resolutions into a single `icon.ico` container.
/// The consuming OS picks the resolution at display time.
pub fn write_ico(img: &DynamicImage, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut icon_dir = IconDir::new(ico::ResourceType::Icon);
    for &size in &ICO_SIZES {
        let rgba = resize(img, size).to_rgba8();
        let entry = IconImage::from_rgba_data(size, size, rgba.into_raw());
        icon_dir.add_entry(IconDirEntry::encode(&entry)?);
    }

    let file = BufWriter::new(File::create(out_dir.join(ICO_NAME))?);
    icon_dir.write(file)?;
    println!("{} generated ({} resolutions, 16-256)", ICO_NAME, ICO_SIZES.len());
    Ok(())
}

/// Writes the main `icon.png` at 512px.
pub fn write_main_png(
    img: &DynamicImage,
    out_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    resize(img, MAIN_ICON_SIZE).save(out_dir.join(MAIN_ICON_NAME))?;
    println!("{} generated", MAIN_ICON_NAME);
    Ok(())
}

/// Writes the ten Windows Store logo slots. These are optional cosmetic
/// assets: each failure is reported and skipped so the remaining slots are
/// still produced. Returns how many were written.
pub fn write_windows_logos(img: &DynamicImage, out_dir: &Path) -> usize {
    let mut written = 0;
    for target in &WINDOWS_LOGOS {
        match resize(img, target.size).save(out_dir.join(target.name)) {
            Ok(()) => {
                println!("{} generated", target.name);
                written += 1;
            }
            Err(err) => eprintln!("{} failed: {}", target.name, err),
        }
    }
    written
}

/// Runs the full generation sequence: core PNGs, the ICO container, the main
/// icon, then the best-effort Windows logos. The output directory must exist.
pub fn generate_all(source: &Path, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let img = load_source(source)?;
    write_core_pngs(&img, out_dir)?;
    write_ico(&img, out_dir)?;
    write_main_png(&img, out_dir)?;
    write_windows_logos(&img, out_dir);
    Ok(())
}
