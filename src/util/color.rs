use crate::models::snapshot::clamp_pct;
use ratatui::style::Color;

/// Hue of pure green on a 0–1 hue wheel (close enough to 1/3).
const GREEN_HUE: f64 = 0.33;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// Map a utilisation percentage onto a green → yellow → red ramp.
/// Out-of-range input is clamped first; never fails.
pub fn color_for(pct: f64) -> Rgb {
    let hue = (1.0 - clamp_pct(pct) / 100.0) * GREEN_HUE;
    let (r, g, b) = hsv_to_rgb(hue, 1.0, 1.0);
    Rgb { r: quantize(r), g: quantize(g), b: quantize(b) }
}

fn quantize(c: f64) -> u8 {
    (c * 255.0) as u8
}

/// Six-sector HSV → RGB, all components in [0, 1].
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_of(c: Rgb) -> f64 {
        // Along the green→red ramp blue is 0 and one of r/g is 255
        let (r, g) = (c.r as f64, c.g as f64);
        if r >= g { g / r / 6.0 } else { (2.0 - r / g) / 6.0 }
    }

    #[test]
    fn test_endpoints() {
        let green = color_for(0.0);
        assert_eq!(green.b, 0);
        assert!(green.g == 255 && green.r <= 5, "got {}", green.to_hex());

        assert_eq!(color_for(100.0).to_hex(), "#ff0000");
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(color_for(-5.0), color_for(0.0));
        assert_eq!(color_for(150.0), color_for(100.0));
        assert_eq!(color_for(f64::NAN), color_for(0.0));
    }

    #[test]
    fn test_hue_decreases_monotonically() {
        let mut last = f64::INFINITY;
        for p in 0..=100 {
            let c = color_for(p as f64);
            assert_eq!(c.b, 0);
            let h = hue_of(c);
            assert!(h <= last + 1e-9, "hue rose at {}%", p);
            last = h;
        }
    }

    #[test]
    fn test_midpoint_is_yellowish() {
        let c = color_for(50.0);
        assert!(c.r > 200 && c.g > 200, "got {}", c.to_hex());
    }

    #[test]
    fn test_into_ratatui_color() {
        let c: Color = color_for(100.0).into();
        assert_eq!(c, Color::Rgb(255, 0, 0));
    }
}
