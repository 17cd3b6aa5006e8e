/// Fixed geometry, colours and file layout shared by the composer, exporter and auditor

pub mod palette {
    /// Steel blue used for the outer disc
    pub const BACKGROUND: [u8; 3] = [70, 130, 180];
    /// Gold used for the plane, the brain and the symbol badges
    pub const ACCENT: [u8; 3] = [255, 215, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    /// Midnight blue used for every outline and for the text
    pub const DARK_OUTLINE: [u8; 3] = [25, 25, 112];
    /// Sky blue used for the inner ring
    pub const LIGHT_FILL: [u8; 3] = [135, 206, 235];
    /// Translucent black behind the equation
    pub const SHADOW: [u8; 4] = [0, 0, 0, 100];
}

pub mod icon {
    /// Width and height of the base icon in pixels
    pub const SIZE: u32 = 512;
    pub const CENTER: f32 = (SIZE / 2) as f32;

    pub const PNG_FILE_NAME: &str = "app_icon_512x512.png";
    pub const JPEG_FILE_NAME: &str = "app_icon_512x512.jpg";

    pub const DEFAULT_JPEG_QUALITY: u8 = 95;
    /// Files above this size get an advisory warning (1 MiB)
    pub const SIZE_WARNING_BYTES: u64 = 1024 * 1024;
}

pub mod layout {
    /// Margins of the three concentric discs, outermost first
    pub const OUTER_MARGIN: f32 = 20.0;
    pub const INNER_MARGIN: f32 = 40.0;
    pub const CENTER_MARGIN: f32 = 80.0;
    /// Margin of the unfilled ring drawn last
    pub const RING_MARGIN: f32 = 5.0;

    pub const OUTER_OUTLINE: f32 = 8.0;
    pub const CENTER_OUTLINE: f32 = 4.0;
    pub const RING_OUTLINE: f32 = 3.0;
    pub const DETAIL_OUTLINE: f32 = 2.0;

    pub const EQUATION: &str = "2+3=5";
    pub const EQUATION_FONT_PX: f32 = 80.0;
    pub const SHADOW_OFFSET: f32 = 3.0;

    /// Plane centre relative to the icon centre
    pub const PLANE_OFFSET: (f32, f32) = (80.0, -80.0);
    /// Brain centre relative to the icon centre
    pub const BRAIN_OFFSET: (f32, f32) = (-80.0, 60.0);
    pub const BRAIN_HALF_WIDTH: f32 = 25.0;
    pub const BRAIN_HALF_HEIGHT: f32 = 12.0;
    pub const BRAIN_FOLD_INSET: f32 = 5.0;
    pub const BRAIN_FOLD_SPACING: f32 = 8.0;

    pub const SYMBOLS: [&str; 5] = ["+", "-", "×", "÷", "="];
    pub const SYMBOL_ANGLES_DEG: [f32; 5] = [0.0, 72.0, 144.0, 216.0, 288.0];
    pub const SYMBOL_ORBIT_RADIUS: f32 = 140.0;
    pub const SYMBOL_BADGE_RADIUS: f32 = 25.0;
    pub const SYMBOL_FONT_PX: f32 = 60.0;
}

pub mod android {
    /// Density buckets and their launcher icon sizes, smallest first
    pub const DENSITY_MAP: [(&str, u32); 5] = [
        ("mipmap-mdpi", 48),
        ("mipmap-hdpi", 72),
        ("mipmap-xhdpi", 96),
        ("mipmap-xxhdpi", 144),
        ("mipmap-xxxhdpi", 192),
    ];

    pub const LAUNCHER_FILE_NAME: &str = "ic_launcher.png";
}

pub mod fonts {
    /// Font files tried in order before falling back to the built-in bitmap font
    pub const DEFAULT_CANDIDATES: [&str; 8] = [
        "/System/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/Arial Unicode.ttf",
        "/Library/Fonts/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    /// File names looked up in the user font directory when enabled
    pub const USER_FONT_DIR_NAMES: [&str; 2] = ["Arial.ttf", "DejaVuSans.ttf"];
}
