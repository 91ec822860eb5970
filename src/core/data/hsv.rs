use crate::core::data::colour::Colour;

/// One hue/saturation/value triple staged by a colour strategy.
///
/// Hue is nominally in `[0,1)`; the conversion wraps it with a Euclidean
/// remainder so slightly out-of-range smoothed hues still land on the wheel.
/// Saturation and value are expected in `[0,1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 0.0,
    };

    pub const WHITE: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 1.0,
    };

    #[must_use]
    pub fn to_colour(self) -> Colour {
        let h = self.h.rem_euclid(1.0);
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;

        let p = self.v * (1.0 - self.s);
        let q = self.v * (1.0 - self.s * f);
        let t = self.v * (1.0 - self.s * (1.0 - f));

        let (r, g, b) = match sector as u8 % 6 {
            0 => (self.v, t, p),
            1 => (q, self.v, p),
            2 => (p, self.v, t),
            3 => (p, q, self.v),
            4 => (t, p, self.v),
            _ => (self.v, p, q),
        };

        Colour {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black() {
        assert_eq!(Hsv::BLACK.to_colour(), Colour::BLACK);
    }

    #[test]
    fn test_white() {
        assert_eq!(Hsv::WHITE.to_colour(), Colour::WHITE);
    }

    #[test]
    fn test_pure_red() {
        let hsv = Hsv {
            h: 0.0,
            s: 1.0,
            v: 1.0,
        };
        assert_eq!(hsv.to_colour(), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_pure_green() {
        let hsv = Hsv {
            h: 1.0 / 3.0,
            s: 1.0,
            v: 1.0,
        };
        assert_eq!(hsv.to_colour(), Colour { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn test_pure_blue() {
        let hsv = Hsv {
            h: 2.0 / 3.0,
            s: 1.0,
            v: 1.0,
        };
        assert_eq!(hsv.to_colour(), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_mid_gray() {
        let hsv = Hsv {
            h: 0.0,
            s: 0.0,
            v: 0.5,
        };
        let colour = hsv.to_colour();
        assert_eq!(colour.r, colour.g);
        assert_eq!(colour.g, colour.b);
        assert_eq!(colour.r, 127); // 0.5 * 255 truncated
    }

    #[test]
    fn test_full_hue_wraps_to_red() {
        let wrapped = Hsv {
            h: 1.0,
            s: 1.0,
            v: 1.0,
        };
        assert_eq!(wrapped.to_colour(), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_negative_hue_wraps_onto_wheel() {
        // -2/3 and 1/3 are the same angle
        let negative = Hsv {
            h: -2.0 / 3.0,
            s: 1.0,
            v: 1.0,
        };
        let positive = Hsv {
            h: 1.0 / 3.0,
            s: 1.0,
            v: 1.0,
        };
        assert_eq!(negative.to_colour(), positive.to_colour());
    }

    #[test]
    fn test_desaturated_ignores_hue() {
        let a = Hsv {
            h: 0.2,
            s: 0.0,
            v: 0.8,
        };
        let b = Hsv {
            h: 0.9,
            s: 0.0,
            v: 0.8,
        };
        assert_eq!(a.to_colour(), b.to_colour());
    }
}
