/// Color utilities for category badges.
use std::fmt;
use std::str::FromStr;

use rand::RngExt;

pub const HUE_RANGE: std::ops::Range<u16> = 0..360;
/// Saturated enough and mid-lightness so white badge text stays readable.
pub const SATURATION_RANGE: std::ops::Range<u8> = 70..100;
pub const LIGHTNESS_RANGE: std::ops::Range<u8> = 35..65;

/// A color in hue/saturation/lightness space; hue in degrees, the rest in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected hsl(H, S%, L%) or #RRGGBB")]
pub struct ParseColorError(pub String);

impl Hsl {
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = f64::from(self.hue % 360) / 360.0;
        let s = f64::from(self.saturation.min(100)) / 100.0;
        let l = f64::from(self.lightness.min(100)) / 100.0;
        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return (v, v, v);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let channel = |t: f64| (hue_to_channel(p, q, t) * 255.0).round() as u8;
        (
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
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

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl FromStr for Hsl {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let inner = s
            .trim()
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let mut parts = inner.split(',').map(str::trim);
        let hue = parts.next().ok_or_else(err)?;
        let saturation = parts.next().ok_or_else(err)?;
        let lightness = parts.next().ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }
        let percent = |v: &str| {
            v.strip_suffix('%')
                .and_then(|n| n.trim().parse::<u8>().ok())
                .filter(|n| *n <= 100)
        };
        Ok(Self {
            hue: hue.parse::<u16>().ok().filter(|h| *h < 360).ok_or_else(err)?,
            saturation: percent(saturation).ok_or_else(err)?,
            lightness: percent(lightness).ok_or_else(err)?,
        })
    }
}

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Resolve a stored color string (`hsl(...)` or `#RRGGBB`) to RGB.
pub fn parse_rgb(value: &str) -> Result<(u8, u8, u8), ParseColorError> {
    let value = value.trim();
    if is_valid_hex(value) {
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&value[range], 16);
        return match (channel(1..3), channel(3..5), channel(5..7)) {
            (Ok(r), Ok(g), Ok(b)) => Ok((r, g, b)),
            _ => Err(ParseColorError(value.to_string())),
        };
    }
    value.parse::<Hsl>().map(Hsl::to_rgb)
}

/// Generate a random badge color.
pub fn random_color() -> Hsl {
    let mut rng = rand::rng();
    Hsl {
        hue: rng.random_range(HUE_RANGE),
        saturation: rng.random_range(SATURATION_RANGE),
        lightness: rng.random_range(LIGHTNESS_RANGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_colors_stay_in_legible_band() {
        for _ in 0..1000 {
            let color = random_color();
            assert!(HUE_RANGE.contains(&color.hue), "{color}");
            assert!(SATURATION_RANGE.contains(&color.saturation), "{color}");
            assert!(LIGHTNESS_RANGE.contains(&color.lightness), "{color}");
        }
    }

    #[test]
    fn renders_as_css() {
        let color = Hsl { hue: 210, saturation: 75, lightness: 40 };
        assert_eq!(color.to_string(), "hsl(210, 75%, 40%)");
        assert_eq!("hsl(210, 75%, 40%)".parse::<Hsl>(), Ok(color));
        assert_eq!("hsl(210,75%,40%)".parse::<Hsl>(), Ok(color));
    }

    #[test]
    fn rejects_out_of_range_css() {
        assert!("hsl(360, 75%, 40%)".parse::<Hsl>().is_err());
        assert!("hsl(10, 175%, 40%)".parse::<Hsl>().is_err());
        assert!("hsl(10, 75, 40%)".parse::<Hsl>().is_err());
        assert!("rgb(1, 2, 3)".parse::<Hsl>().is_err());
    }

    #[test]
    fn converts_primaries_to_rgb() {
        let red = Hsl { hue: 0, saturation: 100, lightness: 50 };
        let green = Hsl { hue: 120, saturation: 100, lightness: 50 };
        let blue = Hsl { hue: 240, saturation: 100, lightness: 50 };
        assert_eq!(red.to_rgb(), (255, 0, 0));
        assert_eq!(green.to_rgb(), (0, 255, 0));
        assert_eq!(blue.to_rgb(), (0, 0, 255));
    }

    #[test]
    fn parses_hex_and_hsl() {
        assert_eq!(parse_rgb("#FF8000"), Ok((255, 128, 0)));
        assert_eq!(parse_rgb("hsl(0, 100%, 50%)"), Ok((255, 0, 0)));
        assert!(parse_rgb("tomato").is_err());
    }
}
