//! A [`Color`] represents a color that was specified in any of the supported
//! color spaces.

use crate::models::cmyk::Cmyk;
use crate::models::hex::Hex;
use crate::models::hsb::Hsb;
use crate::models::hsl::{Hsl, Hsla};
use crate::models::lab::Lab;
use crate::models::rgb::{Rgb, Rgba};
use crate::models::xyz::Xyz;

/// A 64-bit floating point value that all fractional components are stored
/// as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The color spaces and forms supported by the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    /// The RGB color space with 8-bit channels.
    Rgb,
    /// The RGB color space with an alpha channel.
    Rgba,
    /// RGB channels written as two-digit hexadecimal pairs.
    Hex,
    /// The HSL (hue, saturation, lightness) notation of the RGB color space.
    Hsl,
    /// The HSL notation with an alpha channel.
    Hsla,
    /// The HSB (hue, saturation, brightness) notation of the RGB color
    /// space.
    Hsb,
    /// The CIE-Lab color space.
    Lab,
    /// The CIE-XYZ color space with a D65 reference white.
    Xyz,
    /// The CMYK (cyan, magenta, yellow, key) form.
    Cmyk,
}

/// A color specified in any of the supported color spaces.
///
/// The variants are thin wrappers around the per-space models; use
/// [`Color::to_space`] to convert between them.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// A color specified with RGB channels.
    Rgb(Rgb),
    /// A color specified with RGB channels and an alpha channel.
    Rgba(Rgba),
    /// A color specified with hexadecimal channel pairs.
    Hex(Hex),
    /// A color specified with the HSL notation.
    Hsl(Hsl),
    /// A color specified with the HSL notation and an alpha channel.
    Hsla(Hsla),
    /// A color specified with the HSB notation.
    Hsb(Hsb),
    /// A color specified in the CIE-Lab color space.
    Lab(Lab),
    /// A color specified in the CIE-XYZ color space.
    Xyz(Xyz),
    /// A color specified with the CMYK form.
    Cmyk(Cmyk),
}

impl Color {
    /// Return the tag of the color space the color is specified in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Space::Rgb,
            Color::Rgba(_) => Space::Rgba,
            Color::Hex(_) => Space::Hex,
            Color::Hsl(_) => Space::Hsl,
            Color::Hsla(_) => Space::Hsla,
            Color::Hsb(_) => Space::Hsb,
            Color::Lab(_) => Space::Lab,
            Color::Xyz(_) => Space::Xyz,
            Color::Cmyk(_) => Space::Cmyk,
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Color::Rgba(value)
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}

impl From<Hsla> for Color {
    fn from(value: Hsla) -> Self {
        Color::Hsla(value)
    }
}

impl From<Hsb> for Color {
    fn from(value: Hsb) -> Self {
        Color::Hsb(value)
    }
}

impl From<Lab> for Color {
    fn from(value: Lab) -> Self {
        Color::Lab(value)
    }
}

impl From<Xyz> for Color {
    fn from(value: Xyz) -> Self {
        Color::Xyz(value)
    }
}

impl From<Cmyk> for Color {
    fn from(value: Cmyk) -> Self {
        Color::Cmyk(value)
    }
}
