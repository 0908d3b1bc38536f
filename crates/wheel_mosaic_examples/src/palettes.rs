//! The mosaic color set the demos use.
//!
//! Six five-role palettes and a dark muted background, picked to echo a
//! layered, richly-colored textile mosaic.
use wheel_mosaic::palette::{Color, Palette};

/// Background the demos clear to before rendering.
pub const BACKGROUND: Color = Color::from_hex(0x2A363B);

/// Deep blue/purple with yellow/orange accents; fiery reds; warm earth
/// tones; cool blues; vibrant pinks; deep teal.
pub fn mosaic_palettes() -> Vec<Palette> {
    vec![
        Palette::from_hex([0x45206A, 0xFFD700, 0xFF8C00, 0xB0E0E6, 0x8A2BE2]),
        Palette::from_hex([0xD90429, 0xF4D35E, 0xF7B267, 0x0A796F, 0x2E4057]),
        Palette::from_hex([0xA34A2A, 0xF2AF29, 0xE0A890, 0x3E8914, 0xD4327C]),
        Palette::from_hex([0x004C6D, 0x7FC2BF, 0xFFC94F, 0xD83A56, 0x5C88BF]),
        Palette::from_hex([0xC11F68, 0xF9E795, 0xF5EEF8, 0x2ECC71, 0x8E44AD]),
        Palette::from_hex([0x006D77, 0xFF8C00, 0xE29578, 0x83C5BE, 0xD64045]),
    ]
}
