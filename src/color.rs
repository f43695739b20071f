/// 24-bit colour used by the framebuffer, the palette and the text overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::rgb8(0, 0, 0);
    pub const WHITE: Rgb = Rgb::rgb8(255, 255, 255);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Builds a colour from a `0xRRGGBB` literal
    pub const fn hex(value: u32) -> Self {
        Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Channels as floats in [0, 1]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Builds a colour from unit floats, clamping each channel
    pub fn from_unit(c: [f64; 3]) -> Self {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb::rgb8(to_u8(c[0]), to_u8(c[1]), to_u8(c[2]))
    }

    /// Linear blend towards `other`; `t = 0` keeps `self`, `t = 1` yields `other`
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let a = self.to_unit();
        let b = other.to_unit();
        Rgb::from_unit([
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
        ])
    }

    /// Perceived brightness in [0, 1]
    #[cfg(test)]
    pub fn luminance(self) -> f64 {
        let [r, g, b] = self.to_unit();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal_splits_channels() {
        assert_eq!(Rgb::hex(0x00ff88), Rgb::rgb8(0, 255, 136));
        assert_eq!(Rgb::hex(0xf3f4f6), Rgb::rgb8(0xf3, 0xf4, 0xf6));
    }

    #[test]
    fn mix_endpoints() {
        let a = Rgb::rgb8(10, 20, 30);
        let b = Rgb::rgb8(200, 100, 0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 7.0), b);
    }

    #[test]
    fn from_unit_clamps() {
        assert_eq!(Rgb::from_unit([2.0, -1.0, 0.5]), Rgb::rgb8(255, 0, 128));
    }
}
