/// Hue in degrees, saturation and lightness in percent, alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    pub fn with_lightness(self, lightness: f32) -> Self {
        Self { lightness, ..self }
    }

    /// Unmultiplied 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let h = self.hue.rem_euclid(360.0) / 360.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        [
            to_byte(r),
            to_byte(g),
            to_byte(b),
            to_byte(self.alpha.clamp(0.0, 1.0)),
        ]
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Straight RGBA with a float alpha, for the static backdrop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, to_byte(self.alpha.clamp(0.0, 1.0))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        assert_eq!(Hsla::new(0.0, 100.0, 50.0, 1.0).to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(Hsla::new(120.0, 100.0, 50.0, 1.0).to_rgba8(), [0, 255, 0, 255]);
        assert_eq!(Hsla::new(240.0, 100.0, 50.0, 0.0).to_rgba8(), [0, 0, 255, 0]);
    }

    #[test]
    fn grey_ignores_hue() {
        assert_eq!(Hsla::new(270.0, 0.0, 50.0, 0.5).to_rgba8(), [128, 128, 128, 128]);
    }

    #[test]
    fn violet_band_is_blue_heavy() {
        let [r, g, b, _] = Hsla::new(266.0, 80.0, 75.0, 1.0).to_rgba8();
        assert!(b > r && r > g, "unexpected violet: {r} {g} {b}");
    }
}
