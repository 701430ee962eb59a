use gpui::Rgba;

// CIE Lab reference white (D65) and the piecewise constants of the Lab transfer function.
const XN: f32 = 0.950_470;
const YN: f32 = 1.;
const ZN: f32 = 1.088_830;
const T0: f32 = 0.137_931_03;
const T1: f32 = 0.206_896_55;
const T2: f32 = 0.128_418_55;
const T3: f32 = 0.008_856_452;

/// Lightness or chroma units moved per unit of `darken`/`brighten`/`saturate` amount.
const KN: f32 = 18.;

/// Extension trait for deriving colors from a base color.
///
/// Transforms work in the perceptual Lab/LCh spaces and clip the result back
/// into sRGB, so chained calls behave like applying each step to a real color.
pub trait RgbaExt {
    /// Lowers Lab lightness by `amount` steps.
    fn darken(self, amount: f32) -> Self;

    /// Raises Lab lightness by `amount` steps.
    fn brighten(self, amount: f32) -> Self;

    /// Raises LCh chroma by `amount` steps. Negative amounts desaturate.
    fn saturate(self, amount: f32) -> Self;

    /// `#rrggbb`, or `#rrggbbaa` when the color is not fully opaque.
    fn to_hex(&self) -> String;
}

impl RgbaExt for Rgba {
    fn darken(self, amount: f32) -> Self {
        let Lab { l, a, b } = Lab::from_rgba(&self);
        Lab {
            l: l - KN * amount,
            a,
            b,
        }
        .into_rgba(self.a)
    }

    fn brighten(self, amount: f32) -> Self {
        self.darken(-amount)
    }

    fn saturate(self, amount: f32) -> Self {
        let Lch { l, c, h } = Lab::from_rgba(&self).into_lch();
        Lch {
            l,
            c: (c + KN * amount).max(0.),
            h,
        }
        .into_lab()
        .into_rgba(self.a)
    }

    fn to_hex(&self) -> String {
        let [r, g, b, a] = [self.r, self.g, self.b, self.a].map(to_byte);

        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0., 1.) * 255.).round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Lab {
    l: f32,
    a: f32,
    b: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Lch {
    l: f32,
    c: f32,
    /// Degrees.
    h: f32,
}

impl Lab {
    fn from_rgba(color: &Rgba) -> Self {
        let [r, g, b] = [color.r, color.g, color.b].map(|c| srgb_to_linear(c.clamp(0., 1.)));

        let x = xyz_to_lab((0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / XN);
        let y = xyz_to_lab((0.212_672_9 * r + 0.715_152_2 * g + 0.072_175 * b) / YN);
        let z = xyz_to_lab((0.019_333_9 * r + 0.119_192 * g + 0.950_304_1 * b) / ZN);

        Self {
            l: (116. * y - 16.).max(0.),
            a: 500. * (x - y),
            b: 200. * (y - z),
        }
    }

    fn into_rgba(self, alpha: f32) -> Rgba {
        let y = (self.l + 16.) / 116.;
        let x = y + self.a / 500.;
        let z = y - self.b / 200.;

        let x = XN * lab_to_xyz(x);
        let y = YN * lab_to_xyz(y);
        let z = ZN * lab_to_xyz(z);

        Rgba {
            r: linear_to_srgb(3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z),
            g: linear_to_srgb(-0.969_266 * x + 1.876_010_8 * y + 0.041_556 * z),
            b: linear_to_srgb(0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z),
            a: alpha,
        }
    }

    fn into_lch(self) -> Lch {
        let c = self.a.hypot(self.b);
        // Neutral colors have no hue. Treat it as 0 so rounding noise in `a`
        // and `b` can't pick one.
        let h = if (c * 10_000.).round() == 0. {
            0.
        } else {
            self.b.atan2(self.a).to_degrees().rem_euclid(360.)
        };

        Lch { l: self.l, c, h }
    }
}

impl Lch {
    fn into_lab(self) -> Lab {
        let h = self.h.to_radians();

        Lab {
            l: self.l,
            a: h.cos() * self.c,
            b: h.sin() * self.c,
        }
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    let c = if c <= 0.003_04 {
        12.92 * c
    } else {
        1.055 * c.powf(1. / 2.4) - 0.055
    };

    c.clamp(0., 1.)
}

fn xyz_to_lab(t: f32) -> f32 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}

fn lab_to_xyz(t: f32) -> f32 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}
