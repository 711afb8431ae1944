// File: crates/m3-core/src/theme.rs
// Summary: Colors and path styling resolved from the drawing-surface configuration.

use crate::error::{ChartError, Result};
use crate::types::SurfaceConfig;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb`, `#rrggbbaa`, or a CSS color name from the built-in table.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or(ChartError::mismatch("color", "#rrggbb or #rrggbbaa"));
        }
        NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, c)| c)
            .ok_or(ChartError::mismatch("color", "a known color name"))
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
        _ => None,
    }
}

const NAMED: &[(&str, Rgba)] = &[
    ("steelblue", Rgba::rgb(70, 130, 180)),
    ("black", Rgba::rgb(0, 0, 0)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("red", Rgba::rgb(255, 0, 0)),
    ("green", Rgba::rgb(0, 128, 0)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("purple", Rgba::rgb(128, 0, 128)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("grey", Rgba::rgb(128, 128, 128)),
    ("lightgray", Rgba::rgb(211, 211, 211)),
    ("darkgray", Rgba::rgb(169, 169, 169)),
    ("crimson", Rgba::rgb(220, 20, 60)),
    ("teal", Rgba::rgb(0, 128, 128)),
    ("navy", Rgba::rgb(0, 0, 128)),
    ("transparent", Rgba { r: 0, g: 0, b: 0, a: 0 }),
];

/// Stroke/fill applied to a series path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStyle {
    pub stroke: Rgba,
    pub fill: Rgba,
    pub stroke_weight: f64,
}

impl PathStyle {
    pub fn from_surface(surface: &SurfaceConfig) -> Result<Self> {
        Ok(Self {
            stroke: Rgba::parse(&surface.stroke)?,
            fill: Rgba::parse(&surface.fill)?,
            stroke_weight: surface.stroke_weight,
        })
    }
}
