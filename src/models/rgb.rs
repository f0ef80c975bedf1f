//! Model a color in the RGB color space.

use crate::color::{Component, Components};
use crate::validate::{validate, Channel, RangeError};

/// A color specified with 8-bit RGB channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Create a new RGB color. Channels outside `0..=255` are rejected.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self, RangeError> {
        validate(red as Component, Channel::Rgb, "red")?;
        validate(green as Component, Channel::Rgb, "green")?;
        validate(blue as Component, Channel::Rgb, "blue")?;

        Ok(Self {
            red: red as u8,
            green: green as u8,
            blue: blue as u8,
        })
    }

    /// Attach an alpha channel to this color.
    pub fn with_alpha(&self, alpha: Component) -> Result<Rgba, RangeError> {
        validate(alpha, Channel::Alpha, "alpha")?;

        Ok(Rgba {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha,
        })
    }

    /// The red channel of the color.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green channel of the color.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel of the color.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Build a color from components already rounded and clamped into
    /// `0..=255` by a conversion.
    pub(crate) fn from_components(components: &Components) -> Self {
        Self {
            red: components.0 as u8,
            green: components.1 as u8,
            blue: components.2 as u8,
        }
    }

    pub(crate) fn to_components(self) -> Components {
        Components(
            self.red as Component,
            self.green as Component,
            self.blue as Component,
        )
    }
}

/// A color specified with 8-bit RGB channels and an alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Component,
}

impl Rgba {
    /// Create a new RGB color with an alpha channel. Color channels outside
    /// `0..=255` and alpha values outside `0.0..=1.0` are rejected.
    pub fn new(red: i64, green: i64, blue: i64, alpha: Component) -> Result<Self, RangeError> {
        Rgb::new(red, green, blue)?.with_alpha(alpha)
    }

    /// The red channel of the color.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// The green channel of the color.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// The blue channel of the color.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The alpha channel of the color.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    pub(crate) fn from_components(components: &Components, alpha: Component) -> Self {
        Self {
            red: components.0 as u8,
            green: components.1 as u8,
            blue: components.2 as u8,
            alpha,
        }
    }
}
