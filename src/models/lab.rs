//! Model a color in the CIE-Lab color space.

use crate::color::{Component, Components};
use crate::validate::{validate, Channel, RangeError};

/// A color specified in the CIE-Lab color space.
///
/// Lightness is in `0..=100`; the `a` and `b` axes are in `-128..=127`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    lightness: Component,
    a: Component,
    b: Component,
}

impl Lab {
    /// Create a new CIE-Lab color. Out-of-range channels are rejected.
    pub fn new(lightness: Component, a: Component, b: Component) -> Result<Self, RangeError> {
        validate(lightness, Channel::LabLightness, "lightness")?;
        validate(a, Channel::LabAxis, "a")?;
        validate(b, Channel::LabAxis, "b")?;

        Ok(Self { lightness, a, b })
    }

    /// The lightness component of the color.
    pub fn lightness(&self) -> Component {
        self.lightness
    }

    /// The `a` (green to red) axis component of the color.
    pub fn a(&self) -> Component {
        self.a
    }

    /// The `b` (blue to yellow) axis component of the color.
    pub fn b(&self) -> Component {
        self.b
    }

    pub(crate) fn from_components(components: &Components) -> Self {
        Self {
            lightness: components.0,
            a: components.1,
            b: components.2,
        }
    }

    pub(crate) fn to_components(self) -> Components {
        Components(self.lightness, self.a, self.b)
    }
}
