//! Model a color with the HSB notation of the RGB color space.

use crate::color::{Component, Components};
use crate::validate::{validate, Channel, RangeError};

/// A color specified with the HSB (hue, saturation, brightness) notation,
/// also known as HSV.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    hue: Component,
    saturation: Component,
    brightness: Component,
}

impl Hsb {
    /// Create a new HSB color. Out-of-range channels are rejected.
    pub fn new(
        hue: Component,
        saturation: Component,
        brightness: Component,
    ) -> Result<Self, RangeError> {
        validate(hue, Channel::Hue, "hue")?;
        validate(saturation, Channel::Percentage, "saturation")?;
        validate(brightness, Channel::Percentage, "brightness")?;

        Ok(Self {
            hue,
            saturation,
            brightness,
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

    /// The brightness component of the color, as a percentage.
    pub fn brightness(&self) -> Component {
        self.brightness
    }

    pub(crate) fn from_components(components: &Components) -> Self {
        Self {
            hue: components.0,
            saturation: components.1,
            brightness: components.2,
        }
    }

    pub(crate) fn to_components(self) -> Components {
        Components(self.hue, self.saturation, self.brightness)
    }
}
