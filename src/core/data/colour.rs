#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour { r: 255, g: 255, b: 255 };
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    /// Scales each channel by `factor`, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn shade(self, factor: f64) -> Colour {
        let factor = factor.clamp(0.0, 1.0);

        Colour {
            r: (f64::from(self.r) * factor).round() as u8,
            g: (f64::from(self.g) * factor).round() as u8,
            b: (f64::from(self.b) * factor).round() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_full_keeps_colour() {
        let colour = Colour { r: 10, g: 120, b: 250 };

        assert_eq!(colour.shade(1.0), colour);
    }

    #[test]
    fn test_shade_half() {
        let colour = Colour { r: 100, g: 200, b: 50 };

        assert_eq!(colour.shade(0.5), Colour { r: 50, g: 100, b: 25 });
    }

    #[test]
    fn test_shade_clamps_out_of_range_factors() {
        let colour = Colour { r: 100, g: 200, b: 50 };

        assert_eq!(colour.shade(-1.0), Colour::BLACK);
        assert_eq!(colour.shade(3.0), colour);
    }
}
