/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Interpolation with [`lerp`](Self::lerp) blends each channel independently,
/// which on premultiplied values avoids dark fringes when one end is translucent.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Creates a premultiplied color from a packed straight-alpha `0xAARRGGBB` value.
    ///
    /// This is the layout most UI toolkits use for color literals and theme resources.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, a)
    }

    /// Packs the color back into straight-alpha `0xAARRGGBB`.
    ///
    /// Channels are rounded to the nearest byte, so `from_argb(x).to_argb() == x`
    /// for every opaque `x`.
    pub fn to_argb(self) -> u32 {
        let (r, g, b, a) = self.to_straight();
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        u32::from_be_bytes([byte(a), byte(r), byte(g), byte(b)])
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Channel-wise linear blend between `self` (`t = 0`) and `other` (`t = 1`).
    ///
    /// `t` is clamped to [0, 1]. The endpoints are reproduced exactly:
    /// `a.lerp(b, 1.0) == b` bit for bit.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        Color {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
            a: self.a * s + other.a * t,
        }
    }
}
