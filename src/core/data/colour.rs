/// An opaque RGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An RGB colour with a straight (non-premultiplied) alpha channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    /// Converts hue/saturation/value, each in `[0, 1]`, to RGB.
    ///
    /// Hue wraps, so `1.25` is the same colour as `0.25`. Channels are
    /// truncated when scaled to `0..=255`.
    #[must_use]
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let saturation = saturation.clamp(0.0, 1.0);
        let value = value.clamp(0.0, 1.0);

        if saturation == 0.0 {
            let grey = channel(value);
            return Self {
                r: grey,
                g: grey,
                b: grey,
            };
        }

        let sector = hue.rem_euclid(1.0) * 6.0;
        let index = sector.floor();
        let fraction = sector - index;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        let (r, g, b) = match (index as i64).rem_euclid(6) {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl Rgba {
    #[must_use]
    pub const fn rgb(self) -> Colour {
        Colour {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Composites this colour over `base`.
    #[must_use]
    pub fn blend_over(self, base: Colour) -> Colour {
        Colour {
            r: blend_channel(self.r, base.r, self.a),
            g: blend_channel(self.g, base.g, self.a),
            b: blend_channel(self.b, base.b, self.a),
        }
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let alpha = u32::from(alpha);
    let blended = u32::from(src) * alpha + u32::from(dst) * (255 - alpha);

    ((blended + 127) / 255) as u8
}
