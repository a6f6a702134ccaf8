/// The source artwork every icon is derived from. Assumed square.
pub const SOURCE_ICON: &str = "public/dodoroi_icon.png";

/// Where Tauri expects the generated icon set to live.
pub const ICON_DIR: &str = "src-tauri/icons";

/// Square sizes written out as standalone `{size}x{size}.png` files.
pub const CORE_SIZES: [u32; 4] = [32, 128, 256, 512];

/// `128x128@2x.png` is a 256px render under the retina naming convention.
pub const RETINA_SIZE: u32 = 256;
pub const RETINA_NAME: &str = "128x128@2x.png";

/// Resolutions bundled into the single `icon.ico` container.
/// Windows recommends carrying 16 through 256 in one file.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];
pub const ICO_NAME: &str = "icon.ico";

/// The main `icon.png`; 512px is the usual recommendation.
pub const MAIN_ICON_SIZE: u32 = 512;
pub const MAIN_ICON_NAME: &str = "icon.png";

/// A named Windows Store logo slot with its exact pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoTarget {
    pub name: &'static str,
    pub size: u32,
}

/// Windows Store logo slots (StoreLogo, SquareNxNLogo). These are cosmetic
/// packaging assets, so generation is best effort: one failure must not
/// block the rest.
pub const WINDOWS_LOGOS: [LogoTarget; 10] = [
    LogoTarget { name: "StoreLogo.png", size: 50 },
    LogoTarget { name: "Square30x30Logo.png", size: 30 },
    LogoTarget { name: "Square44x44Logo.png", size: 44 },
    LogoTarget { name: "Square71x71Logo.png", size: 71 },
    LogoTarget { name: "Square89x89Logo.png", size: 89 },
    LogoTarget { name: "Square107x107Logo.png", size: 107 },
    LogoTarget { name: "Square142x142Logo.png", size: 142 },
    LogoTarget { name: "Square150x150Logo.png", size: 150 },
    LogoTarget { name: "Square284x284Logo.png", size: 284 },
    LogoTarget { name: "Square310x310Logo.png", size: 310 },
];
