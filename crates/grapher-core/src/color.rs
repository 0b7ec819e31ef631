// File: crates/grapher-core/src/color.rs
// Summary: RGBA color value with hex / named-color parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::GrapherError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with its alpha replaced by `alpha` in `[0, 1]` (clamped).
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        Self { a: (a * 255.0).round() as u8, ..self }
    }

    pub fn alpha_f(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
        }
    }
}

impl FromStr for Color {
    type Err = GrapherError;

    /// Accepts `#rgb`, `#rrggbb`, `#aarrggbb` and common SVG color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || GrapherError::InvalidColor(s.to_string());
        if let Some(hex) = s.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid());
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return match hex.len() {
                3 => Ok(Color::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
                6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Ok(Color::from_argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
                _ => Err(invalid()),
            };
        }
        named(&s.to_ascii_lowercase()).ok_or_else(invalid)
    }
}

fn named(name: &str) -> Option<Color> {
    let c = match name {
        "black" => Color::rgb(0, 0, 0),
        "white" => Color::rgb(255, 255, 255),
        "red" => Color::rgb(255, 0, 0),
        "lime" => Color::rgb(0, 255, 0),
        "green" => Color::rgb(0, 128, 0),
        "darkgreen" => Color::rgb(0, 100, 0),
        "blue" => Color::rgb(0, 0, 255),
        "navy" => Color::rgb(0, 0, 128),
        "yellow" => Color::rgb(255, 255, 0),
        "orange" => Color::rgb(255, 165, 0),
        "cyan" | "aqua" => Color::rgb(0, 255, 255),
        "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
        "purple" => Color::rgb(128, 0, 128),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
        "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
        "silver" => Color::rgb(192, 192, 192),
        "maroon" => Color::rgb(128, 0, 0),
        "olive" => Color::rgb(128, 128, 0),
        "teal" => Color::rgb(0, 128, 128),
        "transparent" => Color::from_argb(0, 0, 0, 0),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands_each_nibble() {
        assert_eq!("#0f0".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
        assert_eq!("#060".parse::<Color>().unwrap(), Color::rgb(0, 0x66, 0));
    }

    #[test]
    fn long_hex_and_argb() {
        assert_eq!("#336699".parse::<Color>().unwrap(), Color::rgb(0x33, 0x66, 0x99));
        assert_eq!("#80ff0000".parse::<Color>().unwrap(), Color::from_argb(0x80, 255, 0, 0));
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!("DarkGreen".parse::<Color>().unwrap(), Color::rgb(0, 100, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!("#12".parse::<Color>().is_err());
        assert!("#ggg".parse::<Color>().is_err());
        assert!("not-a-color".parse::<Color>().is_err());
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::WHITE.with_alpha(0.5).a, 128);
        assert_eq!(Color::WHITE.with_alpha(2.0).a, 255);
        assert_eq!(Color::WHITE.with_alpha(-1.0).a, 0);
    }

    #[test]
    fn display_round_trips_opaque_colors() {
        assert_eq!(Color::rgb(0xcc, 0xcc, 0xcc).to_string(), "#cccccc");
    }
}
