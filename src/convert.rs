//! Conversions between the color space models.
//!
//! Conversions are only implemented on relevant models; every cross-space
//! path is composed from them. [`Color::to_space`] routes through RGB as the
//! hub space, except for CIE-Lab and CIE-XYZ which convert into each other
//! directly. Intermediate math stays in floating point; rounding to integer
//! channels happens once, at the final step of a chain.
//!
//! Conversions are total: their inputs are already validated tuples, so they
//! can not fail.
//!
//! ```rust
//! use tinct::{Lab, Rgb};
//! let red = Lab::new(53.23, 80.11, 67.22)? // create color in CIE-Lab.
//!     .to_xyz()                            // convert to CIE-XYZ.
//!     .to_rgb();                           // convert to RGB.
//! assert_eq!(red, Rgb::new(255, 0, 0)?);
//! # Ok::<(), tinct::RangeError>(())
//! ```

use crate::color::{Color, Component, Components, Space};
use crate::models::cmyk::Cmyk;
use crate::models::hex::Hex;
use crate::models::hsb::Hsb;
use crate::models::hsl::{Hsl, Hsla};
use crate::models::lab::Lab;
use crate::models::rgb::{Rgb, Rgba};
use crate::models::xyz::Xyz;

impl Color {
    /// Convert this color from its current color space/form to the
    /// specified color space/form.
    ///
    /// Converting to the current space returns the color unchanged. An alpha
    /// channel on the source is carried over when the target space holds
    /// one, and defaults to fully opaque otherwise.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space() == space {
            return self.clone();
        }

        // Handle conversions that do not pass through RGB, so no channel is
        // quantized on the way.
        match (self, space) {
            (Color::Lab(lab), S::Xyz) => return Color::Xyz(lab.to_xyz()),
            (Color::Xyz(xyz), S::Lab) => return Color::Lab(xyz.to_lab()),
            (Color::Hsl(hsl), S::Hsla) => {
                return Color::Hsla(Hsla::from_components(&hsl.to_components(), 1.0))
            }
            (Color::Hsla(hsla), S::Hsl) => return Color::Hsl(hsla.to_hsl()),
            _ => {}
        }

        let alpha = match self {
            Color::Rgba(rgba) => Some(rgba.alpha()),
            Color::Hsla(hsla) => Some(hsla.alpha()),
            Color::Hex(hex) => hex.alpha().map(|a| a as Component / 255.0),
            _ => None,
        };

        // The rest converts through RGB.
        let rgb = match self {
            Color::Rgb(rgb) => *rgb,
            Color::Rgba(rgba) => rgba.to_rgb(),
            Color::Hex(hex) => hex.to_rgb(),
            Color::Hsl(hsl) => hsl.to_rgb(),
            Color::Hsla(hsla) => hsla.to_hsl().to_rgb(),
            Color::Hsb(hsb) => hsb.to_rgb(),
            Color::Lab(lab) => lab.to_rgb(),
            Color::Xyz(xyz) => xyz.to_rgb(),
            Color::Cmyk(cmyk) => cmyk.to_rgb(),
        };

        match space {
            S::Rgb => Color::Rgb(rgb),
            S::Rgba => Color::Rgba(Rgba::from_components(
                &rgb.to_components(),
                alpha.unwrap_or(1.0),
            )),
            S::Hex => Color::Hex(Hex::from_channels(
                rgb.red(),
                rgb.green(),
                rgb.blue(),
                alpha.map(|a| (a * 255.0).round() as u8),
            )),
            S::Hsl => Color::Hsl(rgb.to_hsl()),
            S::Hsla => Color::Hsla(Hsla::from_components(
                &rgb.to_hsl().to_components(),
                alpha.unwrap_or(1.0),
            )),
            S::Hsb => Color::Hsb(rgb.to_hsb()),
            S::Lab => Color::Lab(rgb.to_lab()),
            S::Xyz => Color::Xyz(rgb.to_xyz()),
            S::Cmyk => Color::Cmyk(rgb.to_cmyk()),
        }
    }
}

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_components(&util::rgb_to_hsl(&self.to_components()))
    }

    /// Convert this color to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        Hsb::from_components(&util::rgb_to_hsb(&self.to_components()))
    }

    /// Convert this color to the CIE-XYZ color space.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from_components(&util::rgb_to_xyz(&self.to_components()))
    }

    /// Convert this color to the CIE-Lab color space, composing through
    /// CIE-XYZ.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Convert this color to the CMYK form.
    pub fn to_cmyk(&self) -> Cmyk {
        let (cyan, magenta, yellow, key) = util::rgb_to_cmyk(&self.to_components());
        Cmyk::from_channels(cyan, magenta, yellow, key)
    }

    /// Convert this color to hexadecimal channel pairs.
    pub fn to_hex(&self) -> Hex {
        Hex::from_channels(self.red(), self.green(), self.blue(), None)
    }

    /// Convert this color to RGB with a fully opaque alpha channel.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::from_components(&self.to_components(), 1.0)
    }
}

impl Rgba {
    /// Convert this color to RGB, dropping the alpha channel.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&Components(
            self.red() as Component,
            self.green() as Component,
            self.blue() as Component,
        ))
    }

    /// Convert this color to the HSL notation, carrying the alpha channel
    /// over.
    pub fn to_hsla(&self) -> Hsla {
        Hsla::from_components(&self.to_rgb().to_hsl().to_components(), self.alpha())
    }

    /// Convert this color to hexadecimal channel pairs, including an alpha
    /// pair.
    pub fn to_hex(&self) -> Hex {
        Hex::from_channels(
            self.red(),
            self.green(),
            self.blue(),
            Some((self.alpha() * 255.0).round() as u8),
        )
    }
}

impl Hex {
    /// Convert this color to RGB, dropping any alpha pair.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&Components(
            self.red() as Component,
            self.green() as Component,
            self.blue() as Component,
        ))
    }

    /// Convert this color to RGB with an alpha channel. A missing alpha pair
    /// defaults to fully opaque.
    pub fn to_rgba(&self) -> Rgba {
        let alpha = match self.alpha() {
            Some(alpha) => alpha as Component / 255.0,
            None => 1.0,
        };
        Rgba::from_components(&self.to_rgb().to_components(), alpha)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&util::hsl_to_rgb(&self.to_components()))
    }
}

impl Hsla {
    /// Convert this color to the HSL notation, dropping the alpha channel.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_components(&Components(
            self.hue(),
            self.saturation(),
            self.lightness(),
        ))
    }

    /// Convert this color to RGB, carrying the alpha channel over.
    pub fn to_rgba(&self) -> Rgba {
        Rgba::from_components(&self.to_hsl().to_rgb().to_components(), self.alpha())
    }
}

impl Hsb {
    /// Convert this color from the HSB notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&util::hsb_to_rgb(&self.to_components()))
    }
}

impl Lab {
    /// Convert this color to the CIE-XYZ color space.
    pub fn to_xyz(&self) -> Xyz {
        Xyz::from_components(&util::lab_to_xyz(&self.to_components()))
    }

    /// Convert this color to RGB, composing through CIE-XYZ.
    pub fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }
}

impl Xyz {
    /// Convert this color to the CIE-Lab color space.
    pub fn to_lab(&self) -> Lab {
        Lab::from_components(&util::xyz_to_lab(&self.to_components()))
    }

    /// Convert this color to RGB. Values outside the RGB gamut are clamped
    /// into range.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&util::xyz_to_rgb(&self.to_components()))
    }
}

impl Cmyk {
    /// Convert this color from the CMYK form to RGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_components(&util::cmyk_to_rgb(
            self.cyan(),
            self.magenta(),
            self.yellow(),
            self.key(),
        ))
    }
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::{transform, transform_3x3, Transform};
    use crate::models::xyz::D65;

    /// Piecewise split point of the CIE-Lab transfer function.
    const EPSILON: Component = 0.008856;

    /// Slope of the linear segment of the CIE-Lab transfer function.
    const KAPPA: Component = 7.787;

    /// Convert from CIE-Lab to CIE-XYZ.
    ///
    /// The forward encoding uses a linear segment near black; the inverse
    /// applies the matching segment in the same regime.
    pub fn lab_to_xyz(from: &Components) -> Components {
        let Components(lightness, a, b) = *from;

        let fy = (lightness + 16.0) / 116.0;
        let fx = fy + a / 500.0;
        let fz = fy - b / 200.0;

        let g = |t: Component| {
            let cubed = t * t * t;
            if cubed > EPSILON {
                cubed
            } else {
                (t - 16.0 / 116.0) / KAPPA
            }
        };

        Components(
            g(fx) * D65::WHITE_POINT.0,
            g(fy) * D65::WHITE_POINT.1,
            g(fz) * D65::WHITE_POINT.2,
        )
    }

    /// Convert from CIE-XYZ to CIE-Lab.
    pub fn xyz_to_lab(from: &Components) -> Components {
        let white_relative = Components(
            from.0 / D65::WHITE_POINT.0,
            from.1 / D65::WHITE_POINT.1,
            from.2 / D65::WHITE_POINT.2,
        );

        let Components(fx, fy, fz) = white_relative.map(|t| {
            if t > EPSILON {
                t.cbrt()
            } else {
                KAPPA * t + 16.0 / 116.0
            }
        });

        Components(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// Convert from CIE-XYZ to RGB channels in `0..=255`, rounded and
    /// clamped to absorb floating point overshoot at the gamut boundary.
    pub fn xyz_to_rgb(from: &Components) -> Components {
        #[rustfmt::skip]
        const FROM_XYZ: Transform = transform_3x3(
             3.2406, -0.9689,  0.0557,
            -1.5372,  1.8758, -0.2040,
            -0.4986,  0.0415,  1.0570,
        );

        let linear = transform(&FROM_XYZ, from.map(|v| v / 100.0));

        let encoded = linear.map(|c| {
            if c > 0.0031308 {
                1.055 * c.powf(1.0 / 2.4) - 0.055
            } else {
                12.92 * c
            }
        });

        encoded.map(|c| (c * 255.0).clamp(0.0, 255.0).round())
    }

    /// Convert from RGB channels in `0..=255` to CIE-XYZ.
    pub fn rgb_to_xyz(from: &Components) -> Components {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124, 0.2126, 0.0193,
            0.3576, 0.7152, 0.1192,
            0.1805, 0.0722, 0.9505,
        );

        let linear = from.map(|v| {
            let v = v / 255.0;
            if v > 0.04045 {
                ((v + 0.055) / 1.055).powf(2.4)
            } else {
                v / 12.92
            }
        });

        transform(&TO_XYZ, linear.map(|v| v * 100.0))
    }

    /// Calculate the hue from RGB components and return it along with the
    /// min and max of the channels scaled to `0..=1`.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = from.map(|v| v / 255.0);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        // Achromatic colors have no meaningful hue; report zero degrees.
        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB channels in `0..=255` to the HSL notation with hue
    /// in degrees and saturation/lightness as percentages.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Components(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert from the HSL notation to RGB channels in `0..=255`.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;
        let saturation = saturation / 100.0;
        let lightness = lightness / 100.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        hue_sector(hue, chroma, x).map(|v| ((v + m) * 255.0).round())
    }

    /// Convert from RGB channels in `0..=255` to the HSB notation with hue
    /// in degrees and saturation/brightness as percentages.
    pub fn rgb_to_hsb(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let delta = max - min;
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Components(hue, saturation * 100.0, max * 100.0)
    }

    /// Convert from the HSB notation to RGB channels in `0..=255`.
    pub fn hsb_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, brightness) = *from;
        let saturation = saturation / 100.0;
        let brightness = brightness / 100.0;

        let chroma = brightness * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = brightness - chroma;

        hue_sector(hue, chroma, x).map(|v| ((v + m) * 255.0).round())
    }

    /// Assign the chroma and intermediate values to RGB positions based on
    /// the 60 degree sector the hue falls in.
    fn hue_sector(hue: Component, chroma: Component, x: Component) -> Components {
        if hue < 60.0 {
            Components(chroma, x, 0.0)
        } else if hue < 120.0 {
            Components(x, chroma, 0.0)
        } else if hue < 180.0 {
            Components(0.0, chroma, x)
        } else if hue < 240.0 {
            Components(0.0, x, chroma)
        } else if hue < 300.0 {
            Components(x, 0.0, chroma)
        } else {
            Components(chroma, 0.0, x)
        }
    }

    /// Convert from RGB channels in `0..=255` to the CMYK form.
    pub fn rgb_to_cmyk(from: &Components) -> (Component, Component, Component, Component) {
        let Components(red, green, blue) = from.map(|v| v / 255.0);

        let key = 1.0 - red.max(green).max(blue);
        if key == 1.0 {
            return (0.0, 0.0, 0.0, 1.0);
        }

        let cyan = (1.0 - red - key) / (1.0 - key);
        let magenta = (1.0 - green - key) / (1.0 - key);
        let yellow = (1.0 - blue - key) / (1.0 - key);

        (cyan, magenta, yellow, key)
    }

    /// Convert from the CMYK form to RGB channels in `0..=255`.
    pub fn cmyk_to_rgb(
        cyan: Component,
        magenta: Component,
        yellow: Component,
        key: Component,
    ) -> Components {
        Components(
            255.0 * (1.0 - cyan) * (1.0 - key),
            255.0 * (1.0 - magenta) * (1.0 - key),
            255.0 * (1.0 - yellow) * (1.0 - key),
        )
        .map(Component::round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::color::{Color, Component, Space};

    #[test]
    fn rgb_to_hsl_known_values() {
        #[rustfmt::skip]
        const TESTS: &[(i64, i64, i64, Component, Component, Component)] = &[
            (255,   0,   0,   0.0, 100.0,  50.0),
            (  0, 255,   0, 120.0, 100.0,  50.0),
            (  0,   0, 255, 240.0, 100.0,  50.0),
            (255, 255,   0,  60.0, 100.0,  50.0),
            (  0, 255, 255, 180.0, 100.0,  50.0),
            (255,   0, 255, 300.0, 100.0,  50.0),
            (255, 255, 255,   0.0,   0.0, 100.0),
            (  0,   0,   0,   0.0,   0.0,   0.0),
            (102, 153, 204, 210.0,  50.0,  60.0),
        ];

        for &(red, green, blue, hue, saturation, lightness) in TESTS {
            let hsl = Rgb::new(red, green, blue).unwrap().to_hsl();
            assert_component_eq!(hsl.hue(), hue);
            assert_component_eq!(hsl.saturation(), saturation);
            assert_component_eq!(hsl.lightness(), lightness);
        }
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        #[rustfmt::skip]
        const TESTS: &[(Component, Component, Component, i64, i64, i64)] = &[
            (  0.0, 100.0,  50.0, 255,   0,   0),
            (120.0, 100.0,  50.0,   0, 255,   0),
            (240.0, 100.0,  50.0,   0,   0, 255),
            ( 60.0, 100.0,  50.0, 255, 255,   0),
            (210.0,  50.0,  60.0, 102, 153, 204),
            (  0.0,   0.0, 100.0, 255, 255, 255),
            (  0.0,   0.0,   0.0,   0,   0,   0),
            (360.0, 100.0,  50.0, 255,   0,   0),
        ];

        for &(hue, saturation, lightness, red, green, blue) in TESTS {
            let rgb = Hsl::new(hue, saturation, lightness).unwrap().to_rgb();
            assert_eq!(rgb, Rgb::new(red, green, blue).unwrap(), "hsl({hue}, {saturation}, {lightness})");
        }
    }

    #[test]
    fn rgb_hsl_round_trip_is_within_one_step() {
        const SAMPLES: &[(i64, i64, i64)] = &[
            (0, 0, 0),
            (255, 255, 255),
            (255, 0, 0),
            (1, 2, 3),
            (12, 134, 255),
            (89, 44, 77),
            (128, 128, 128),
            (250, 128, 114),
            (33, 200, 100),
            (77, 77, 78),
        ];

        for &(red, green, blue) in SAMPLES {
            let source = Rgb::new(red, green, blue).unwrap();
            let round_tripped = source.to_hsl().to_rgb();

            // Two integer rounding steps allow the channels to move by at
            // most one.
            for (from, to) in [
                (source.red(), round_tripped.red()),
                (source.green(), round_tripped.green()),
                (source.blue(), round_tripped.blue()),
            ] {
                assert!(
                    (from as i32 - to as i32).abs() <= 1,
                    "rgb({red}, {green}, {blue}) came back as {round_tripped:?}"
                );
            }
        }
    }

    #[test]
    fn rgb_hsb_round_trip_is_within_one_step() {
        const SAMPLES: &[(i64, i64, i64)] = &[
            (0, 0, 0),
            (255, 255, 255),
            (255, 0, 0),
            (12, 134, 255),
            (250, 128, 114),
            (33, 200, 100),
        ];

        for &(red, green, blue) in SAMPLES {
            let source = Rgb::new(red, green, blue).unwrap();
            let round_tripped = source.to_hsb().to_rgb();

            for (from, to) in [
                (source.red(), round_tripped.red()),
                (source.green(), round_tripped.green()),
                (source.blue(), round_tripped.blue()),
            ] {
                assert!(
                    (from as i32 - to as i32).abs() <= 1,
                    "rgb({red}, {green}, {blue}) came back as {round_tripped:?}"
                );
            }
        }
    }

    #[test]
    fn rgb_to_hsb_known_values() {
        let hsb = Rgb::new(255, 0, 0).unwrap().to_hsb();
        assert_component_eq!(hsb.hue(), 0.0);
        assert_component_eq!(hsb.saturation(), 100.0);
        assert_component_eq!(hsb.brightness(), 100.0);

        let rgb = Hsb::new(120.0, 50.0, 80.0).unwrap().to_rgb();
        assert_eq!(rgb, Rgb::new(102, 204, 102).unwrap());
    }

    #[test]
    fn lab_xyz_round_trip_is_exact() {
        const SAMPLES: &[(Component, Component, Component)] = &[
            (50.0, 40.0, -30.0),
            (100.0, 0.0, 0.0),
            (53.23, 80.11, 67.22),
            // Low lightness exercises the linear segment of the transfer
            // function.
            (2.0, 5.0, -5.0),
            (0.0, 0.0, 0.0),
        ];

        for &(lightness, a, b) in SAMPLES {
            let source = Lab::new(lightness, a, b).unwrap();
            let round_tripped = source.to_xyz().to_lab();

            assert_component_eq!(round_tripped.lightness(), lightness);
            assert_component_eq!(round_tripped.a(), a);
            assert_component_eq!(round_tripped.b(), b);
        }
    }

    #[test]
    fn lab_red_reference_point_converts_to_rgb_red() {
        let rgb = Lab::new(53.23, 80.11, 67.22).unwrap().to_rgb();
        assert_eq!(rgb, Rgb::new(255, 0, 0).unwrap());
    }

    #[test]
    fn rgb_red_converts_to_lab_red_reference_point() {
        let lab = Rgb::new(255, 0, 0).unwrap().to_lab();
        assert_component_eq!(lab.lightness(), 53.23, 0.05);
        assert_component_eq!(lab.a(), 80.11, 0.05);
        assert_component_eq!(lab.b(), 67.22, 0.05);
    }

    #[test]
    fn black_converts_to_lab_origin() {
        let lab = Rgb::new(0, 0, 0).unwrap().to_lab();
        assert_component_eq!(lab.lightness(), 0.0);
        assert_component_eq!(lab.a(), 0.0);
        assert_component_eq!(lab.b(), 0.0);
    }

    #[test]
    fn white_point_converts_to_rgb_white() {
        let rgb = Xyz::new(95.047, 100.0, 108.883).to_rgb();
        assert_eq!(rgb, Rgb::new(255, 255, 255).unwrap());
    }

    #[test]
    fn out_of_gamut_xyz_is_clamped() {
        let rgb = Xyz::new(150.0, 100.0, 0.0).to_rgb();
        assert_eq!(rgb.red(), 255);
        assert_eq!(rgb.blue(), 0);
    }

    #[test]
    fn rgb_cmyk_round_trip_reproduces_the_channels() {
        const SAMPLES: &[(i64, i64, i64)] = &[
            (255, 0, 0),
            (0, 0, 0),
            (255, 255, 255),
            (12, 134, 255),
            (89, 44, 77),
        ];

        for &(red, green, blue) in SAMPLES {
            let source = Rgb::new(red, green, blue).unwrap();
            assert_eq!(source.to_cmyk().to_rgb(), source);
        }
    }

    #[test]
    fn cmyk_known_values() {
        let cmyk = Rgb::new(255, 0, 0).unwrap().to_cmyk();
        assert_component_eq!(cmyk.cyan(), 0.0);
        assert_component_eq!(cmyk.magenta(), 1.0);
        assert_component_eq!(cmyk.yellow(), 1.0);
        assert_component_eq!(cmyk.key(), 0.0);

        // Black short-circuits to pure key.
        let cmyk = Rgb::new(0, 0, 0).unwrap().to_cmyk();
        assert_component_eq!(cmyk.cyan(), 0.0);
        assert_component_eq!(cmyk.magenta(), 0.0);
        assert_component_eq!(cmyk.yellow(), 0.0);
        assert_component_eq!(cmyk.key(), 1.0);
    }

    #[test]
    fn hex_round_trips_exactly() {
        let hex = Hex::new("ff", "00", "33").unwrap();
        let rgb = hex.to_rgb();
        assert_eq!(rgb, Rgb::new(255, 0, 51).unwrap());
        assert_eq!(rgb.to_hex(), hex);
    }

    #[test]
    fn hex_alpha_is_carried_into_rgba() {
        let rgba = Hex::with_alpha("ff", "00", "33", "80").unwrap().to_rgba();
        assert_eq!(rgba.red(), 255);
        assert_component_eq!(rgba.alpha(), 128.0 / 255.0);

        // A missing alpha pair defaults to fully opaque.
        let rgba = Hex::new("ff", "00", "33").unwrap().to_rgba();
        assert_component_eq!(rgba.alpha(), 1.0);
    }

    #[test]
    fn converting_to_the_current_space_is_identity() {
        let rgb = Color::from(Rgb::new(1, 2, 3).unwrap());
        assert_eq!(rgb.to_space(Space::Rgb), rgb);

        let hsl = Color::from(Hsl::new(25.5, 33.3, 60.2).unwrap());
        assert_eq!(hsl.to_space(Space::Hsl), hsl);

        let lab = Color::from(Lab::new(50.0, 12.5, -12.5).unwrap());
        assert_eq!(lab.to_space(Space::Lab), lab);
    }

    #[test]
    fn to_space_composes_through_intermediate_hops() {
        // CIE-Lab to HSL has no direct formula; the result has to match the
        // composed Lab -> XYZ -> RGB -> HSL chain.
        let lab = Lab::new(53.23, 80.11, 67.22).unwrap();
        let via_to_space = Color::from(lab).to_space(Space::Hsl);
        let composed = lab.to_rgb().to_hsl();
        assert_eq!(via_to_space, Color::from(composed));
    }

    #[test]
    fn to_space_carries_the_source_alpha() {
        let rgba = Color::from(Rgba::new(10, 20, 30, 0.5).unwrap());
        match rgba.to_space(Space::Hsla) {
            Color::Hsla(hsla) => assert_component_eq!(hsla.alpha(), 0.5),
            other => panic!("expected an HSLA color, got {other:?}"),
        }

        // Sources without an alpha channel convert to fully opaque.
        let rgb = Color::from(Rgb::new(10, 20, 30).unwrap());
        match rgb.to_space(Space::Rgba) {
            Color::Rgba(rgba) => assert_component_eq!(rgba.alpha(), 1.0),
            other => panic!("expected an RGBA color, got {other:?}"),
        }
    }

    #[test]
    fn hsl_to_hsla_does_not_quantize_the_channels() {
        let hsl = Hsl::new(25.5, 33.3, 60.2).unwrap();
        match Color::from(hsl).to_space(Space::Hsla) {
            Color::Hsla(hsla) => {
                assert_component_eq!(hsla.hue(), 25.5);
                assert_component_eq!(hsla.saturation(), 33.3);
                assert_component_eq!(hsla.lightness(), 60.2);
                assert_component_eq!(hsla.alpha(), 1.0);
            }
            other => panic!("expected an HSLA color, got {other:?}"),
        }
    }
}
