/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const NOTCH_BLUE:  Self = Self { r: 0.129, g: 0.588, b: 0.953, a: 0.706 }; // rgba(33, 150, 243, 180)
    pub const WHITE:       Self = Self { r: 1.0,   g: 1.0,   b: 1.0,   a: 1.0 };
    pub const BLACK:       Self = Self { r: 0.0,   g: 0.0,   b: 0.0,   a: 1.0 };
    pub const RED:         Self = Self { r: 1.0,   g: 0.0,   b: 0.0,   a: 1.0 };
    pub const TRANSPARENT: Self = Self { r: 0.0,   g: 0.0,   b: 0.0,   a: 0.0 };

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self::from_rgba8(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?, 255)),
            8 => Some(Self::from_rgba8(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => None,
        }
    }

    /// Parse any color string accepted in the display options:
    /// hex, `rgb(r, g, b)`, `rgba(r, g, b, a)` with `a` in `0–255`, or a basic
    /// color name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        if let Some(args) = lower.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            let [r, g, b, a] = channels::<4>(args)?;
            return Some(Self::from_rgba8(r, g, b, a));
        }
        if let Some(args) = lower.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let [r, g, b] = channels::<3>(args)?;
            return Some(Self::from_rgba8(r, g, b, 255));
        }

        match lower.as_str() {
            "white"       => Some(Self::WHITE),
            "black"       => Some(Self::BLACK),
            "red"         => Some(Self::RED),
            "transparent" => Some(Self::TRANSPARENT),
            _             => Self::from_hex(s),
        }
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (q(self.r), q(self.g), q(self.b), q(self.a));
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Hue (0–360), saturation (0–1) and lightness (0–1); alpha is dropped.
    pub fn to_hsl(self) -> (f32, f32, f32) {
        let (r, g, b) = (self.r, self.g, self.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < 1e-6 {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        let h = if (max - r).abs() < 1e-6 {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if (max - g).abs() < 1e-6 {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        (h * 360.0, s, l)
    }

    /// Build an opaque-by-`alpha` color from HSL (H: 0–360, S: 0–1, L: 0–1).
    pub fn from_hsl(h: f32, s: f32, l: f32, alpha: f32) -> Self {
        if s < 1e-6 {
            return Self { r: l, g: l, b: l, a: alpha };
        }

        fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
            if t < 0.0 { t += 1.0; }
            if t > 1.0 { t -= 1.0; }
            if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
            if t < 0.5 { return q; }
            if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
            p
        }

        let hn = h / 360.0;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self {
            r: hue_to_rgb(p, q, hn + 1.0 / 3.0),
            g: hue_to_rgb(p, q, hn),
            b: hue_to_rgb(p, q, hn - 1.0 / 3.0),
            a: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Parse exactly `N` comma-separated `0–255` integers.
fn channels<const N: usize>(args: &str) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    let mut parts = args.split(',');
    for slot in &mut out {
        *slot = parts.next()?.trim().parse().ok()?;
    }
    parts.next().is_none().then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_css_background() {
        let c = Color::parse("rgba(33, 150, 243, 180)").unwrap();
        assert_eq!(c.to_hex(), "#2196f3b4");
        assert_eq!(Color::parse("#2196f3b4"), Some(c));
    }

    #[test]
    fn parses_names_and_rgb() {
        assert_eq!(Color::parse("White"), Some(Color::WHITE));
        assert_eq!(Color::parse("rgb(0, 0, 0)"), Some(Color::BLACK));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Color::parse("rgba(1, 2, 3)"), None);
        assert_eq!(Color::parse("rgba(1, 2, 3, 4, 5)"), None);
        assert_eq!(Color::parse("rgb(300, 0, 0)"), None);
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("chartreuse"), None);
    }

    #[test]
    fn hex_rejects_sign_prefixed_channels() {
        assert_eq!(Color::from_hex("#+f+f+f"), None);
        assert_eq!(Color::parse("#+f+f+f+f"), None);
        assert!(Color::from_hex("#0f0f0f").is_some());
    }

    #[test]
    fn opaque_hex_omits_alpha() {
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn hsl_round_trip_preserves_color() {
        let c = Color::from_hex("#2196f3").unwrap();
        let (h, s, l) = c.to_hsl();
        assert_eq!(Color::from_hsl(h, s, l, 1.0).to_hex(), "#2196f3");
    }

    #[test]
    fn grey_has_no_saturation() {
        let (_, s, l) = Color::from_hex("#808080").unwrap().to_hsl();
        assert_eq!(s, 0.0);
        assert!((l - 0.502).abs() < 0.01);
    }
}
