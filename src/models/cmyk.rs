//! Model a color with the CMYK form.

use crate::color::Component;
use crate::validate::{validate, Channel, RangeError};

/// A color specified with the CMYK (cyan, magenta, yellow, key) form, each
/// channel a fraction in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    cyan: Component,
    magenta: Component,
    yellow: Component,
    key: Component,
}

impl Cmyk {
    /// Create a new CMYK color. Out-of-range channels are rejected.
    pub fn new(
        cyan: Component,
        magenta: Component,
        yellow: Component,
        key: Component,
    ) -> Result<Self, RangeError> {
        validate(cyan, Channel::Cmyk, "cyan")?;
        validate(magenta, Channel::Cmyk, "magenta")?;
        validate(yellow, Channel::Cmyk, "yellow")?;
        validate(key, Channel::Cmyk, "key")?;

        Ok(Self {
            cyan,
            magenta,
            yellow,
            key,
        })
    }

    /// The cyan component of the color.
    pub fn cyan(&self) -> Component {
        self.cyan
    }

    /// The magenta component of the color.
    pub fn magenta(&self) -> Component {
        self.magenta
    }

    /// The yellow component of the color.
    pub fn yellow(&self) -> Component {
        self.yellow
    }

    /// The key (black) component of the color.
    pub fn key(&self) -> Component {
        self.key
    }

    pub(crate) fn from_channels(
        cyan: Component,
        magenta: Component,
        yellow: Component,
        key: Component,
    ) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }
}
