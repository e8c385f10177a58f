//! Fill-color extraction.
//!
//! A fill attribute carries its color as an `rgb(r,g,b)` substring with
//! integer components and no interior spaces. The source format has no
//! alpha channel; alpha is fixed at full opacity.

use crate::error::ConvertError;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Packs as `0xAARRGGBB` with alpha forced to 255, matching the target
    /// API's `argb_pack_u8s`.
    pub fn packed_argb(self) -> u32 {
        let (r, g, b) = (self.r as u32, self.g as u32, self.b as u32);
        0xff << 24 | r << 16 | g << 8 | b
    }
}

/// Searches `fill` for an `rgb(r,g,b)` substring and returns its
/// components. Callers must not pass absent/empty/"none" fills; those mean
/// "no fill" and are handled before extraction.
pub fn extract_rgb(fill: &str) -> Result<Color, ConvertError> {
    fill.match_indices("rgb(")
        .find_map(|(at, pattern)| components(&fill[at + pattern.len()..]))
        .ok_or_else(|| ConvertError::MalformedFillColor(fill.to_string()))
}

/// Parses `r,g,b)` at the start of `rest`.
fn components(rest: &str) -> Option<Color> {
    let mut rest = rest;
    let r = take_int(&mut rest)?;
    take_char(&mut rest, ',')?;
    let g = take_int(&mut rest)?;
    take_char(&mut rest, ',')?;
    let b = take_int(&mut rest)?;
    take_char(&mut rest, ')')?;
    Some(Color { r, g, b })
}

fn take_int(rest: &mut &str) -> Option<u8> {
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(end);
    *rest = tail;
    digits.parse().ok()
}

fn take_char(rest: &mut &str, expected: char) -> Option<()> {
    *rest = rest.strip_prefix(expected)?;
    Some(())
}
