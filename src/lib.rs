//! tinct provides color models for the common color spaces and notations,
//! eager validation of channel values, and the standard colorimetric
//! conversions between the spaces.
//!
//! ```rust
//! use tinct::{Color, Rgb, Space};
//!
//! let rgb = Rgb::new(255, 0, 0)?;
//! let hsl = rgb.to_hsl();
//! assert_eq!(hsl.hue(), 0.0);
//! assert_eq!(hsl.saturation(), 100.0);
//! assert_eq!(hsl.lightness(), 50.0);
//!
//! // Or route between any two spaces through the tagged `Color`.
//! let lab = Color::from(rgb).to_space(Space::Lab);
//! # Ok::<(), tinct::RangeError>(())
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod math;
mod models;
mod validate;


pub use color::{Color, Component, Components, Space};
pub use models::cmyk::Cmyk;
pub use models::hex::Hex;
pub use models::hsb::Hsb;
pub use models::hsl::{Hsl, Hsla};
pub use models::lab::Lab;
pub use models::rgb::{Rgb, Rgba};
pub use models::xyz::{D65, Xyz};
pub use validate::{hex_pair, validate, Channel, RangeError};
