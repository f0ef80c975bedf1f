//! Model a color with the HSL notation of the RGB color space.

use crate::color::{Component, Components};
use crate::validate::{validate, Channel, RangeError};

/// A color specified with the HSL (hue, saturation, lightness) notation.
///
/// Hue is a degree in `0..=360`; saturation and lightness are percentages in
/// `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    hue: Component,
    saturation: Component,
    lightness: Component,
}

impl Hsl {
    /// Create a new HSL color. Out-of-range channels are rejected.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> Result<Self, RangeError> {
        validate(hue, Channel::Hue, "hue")?;
        validate(saturation, Channel::Percentage, "saturation")?;
        validate(lightness, Channel::Percentage, "lightness")?;

        Ok(Self {
            hue,
            saturation,
            lightness,
        })
    }

    /// Attach an alpha channel to this color.
    pub fn with_alpha(&self, alpha: Component) -> Result<Hsla, RangeError> {
        validate(alpha, Channel::Alpha, "alpha")?;

        Ok(Hsla {
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.lightness,
            alpha,
        })
    }

    /// The hue component of the color, in degrees.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The saturation component of the color, as a percentage.
    pub fn saturation(&self) -> Component {
        self.saturation
    }

    /// The lightness component of the color, as a percentage.
    pub fn lightness(&self) -> Component {
        self.lightness
    }

    pub(crate) fn from_components(components: &Components) -> Self {
        Self {
            hue: components.0,
            saturation: components.1,
            lightness: components.2,
        }
    }

    pub(crate) fn to_components(self) -> Components {
        Components(self.hue, self.saturation, self.lightness)
    }
}

/// A color specified with the HSL notation and an alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    hue: Component,
    saturation: Component,
    lightness: Component,
    alpha: Component,
}

impl Hsla {
    /// Create a new HSL color with an alpha channel. Out-of-range channels
    /// are rejected.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Result<Self, RangeError> {
        Hsl::new(hue, saturation, lightness)?.with_alpha(alpha)
    }

    /// The hue component of the color, in degrees.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The saturation component of the color, as a percentage.
    pub fn saturation(&self) -> Component {
        self.saturation
    }

    /// The lightness component of the color, as a percentage.
    pub fn lightness(&self) -> Component {
        self.lightness
    }

    /// The alpha channel of the color.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    pub(crate) fn from_components(components: &Components, alpha: Component) -> Self {
        Self {
            hue: components.0,
            saturation: components.1,
            lightness: components.2,
            alpha,
        }
    }
}
