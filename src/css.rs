//! Dynamic CSS style-string helpers.
//!
//! The views build a handful of style strings from the active palette:
//! gradients, soft shadows, and contrast-aware text colors. Palette values
//! are hex colors; these helpers decode them so the emitted CSS uses real
//! `rgb()`/`rgba()` functions.

use crate::scheme::Palette;

/// Shadow presets used across cards and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowSize {
    Small,
    Medium,
    Large,
    Extra,
}

impl ShadowSize {
    fn offsets(self) -> &'static str {
        match self {
            ShadowSize::Small => "0 2px 4px",
            ShadowSize::Medium => "0 4px 8px",
            ShadowSize::Large => "0 8px 16px",
            ShadowSize::Extra => "0 12px 24px",
        }
    }
}

/// Decodes a `#RGB` or `#RRGGBB` hex color.
pub fn hex_to_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let digit = c.to_digit(16)? as u8;
                channels[i] = digit * 16 + digit;
            }
            Some((channels[0], channels[1], channels[2]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// RGB channels for a palette token, black when the token is absent or not
/// a decodable hex value.
pub fn rgb_components(palette: &Palette, token: &str) -> (u8, u8, u8) {
    palette
        .get(token)
        .and_then(hex_to_rgb)
        .unwrap_or((0, 0, 0))
}

/// A linear gradient between two palette tokens.
pub fn gradient(palette: &Palette, from: &str, to: &str, direction: &str) -> String {
    let (r1, g1, b1) = rgb_components(palette, from);
    let (r2, g2, b2) = rgb_components(palette, to);
    format!("linear-gradient({direction}, rgb({r1}, {g1}, {b1}), rgb({r2}, {g2}, {b2}))")
}

/// A box-shadow value tinted by a palette token.
pub fn shadow(palette: &Palette, size: ShadowSize, token: &str, opacity: f32) -> String {
    let (r, g, b) = rgb_components(palette, token);
    format!("{} rgba({r}, {g}, {b}, {opacity})", size.offsets())
}

/// Picks a readable text color for the given background token.
pub fn contrast_text(token: &str) -> &'static str {
    const DARK_BACKGROUNDS: &[&str] = &[
        "primary-darken-1",
        "secondary-darken-1",
        "error",
        "warning",
    ];
    if DARK_BACKGROUNDS.contains(&token) {
        "white"
    } else {
        "black"
    }
}
