//! Small colour helpers mirroring the conventions of hex and HSL colours on
//! the web, producing linear `[r, g, b]` triples in `[0, 1]`.

/// Convert a `0xRRGGBB` value into `[r, g, b]` components.
#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Convert hue/saturation/lightness (all in `[0, 1]`, hue wraps) to RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let p = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let q = 2.0 * l - p;
    [
        hue_to_channel(q, p, h + 1.0 / 3.0),
        hue_to_channel(q, p, h),
        hue_to_channel(q, p, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn hex_channels() {
        assert!(approx(hex_to_rgb(0xff00ff), [1.0, 0.0, 1.0]));
        assert!(approx(hex_to_rgb(0x00f5ff), [0.0, 245.0 / 255.0, 1.0]));
        assert!(approx(hex_to_rgb(0x000000), [0.0, 0.0, 0.0]));
    }

    #[test]
    fn hsl_primary_hues() {
        assert!(approx(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(approx(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(approx(hsl_to_rgb(0.5, 1.0, 0.5), [0.0, 1.0, 1.0]));
        assert!(approx(hsl_to_rgb(5.0 / 6.0, 1.0, 0.5), [1.0, 0.0, 1.0]));
    }

    #[test]
    fn hsl_grey_when_unsaturated() {
        assert!(approx(hsl_to_rgb(0.7, 0.0, 0.25), [0.25, 0.25, 0.25]));
    }
}
