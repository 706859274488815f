//! Color parsing, conversion, and formatting.
//!
//! Accepts `#rgb` / `#rrggbb` hex strings and CSS color keywords, converts
//! between RGB and HSL channel triples, and formats back to `#rrggbb`. Pure
//! utility: no dependency on the rest of the crate.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// An RGB triple, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// An HSL triple, hue, saturation, and lightness each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Channel space used when drawing color ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Draw hue, saturation, and lightness independently.
    #[default]
    Hsl,
    /// Draw red, green, and blue independently.
    Rgb,
}

lazy_static! {
    /// CSS basic color keywords plus the extended names that show up in
    /// scene markup all the time.
    static ref NAMED_COLORS: FxHashMap<&'static str, u32> = {
        let mut m = FxHashMap::default();
        m.insert("aqua", 0x00ffff);
        m.insert("black", 0x000000);
        m.insert("blue", 0x0000ff);
        m.insert("brown", 0xa52a2a);
        m.insert("coral", 0xff7f50);
        m.insert("crimson", 0xdc143c);
        m.insert("cyan", 0x00ffff);
        m.insert("fuchsia", 0xff00ff);
        m.insert("gold", 0xffd700);
        m.insert("gray", 0x808080);
        m.insert("green", 0x008000);
        m.insert("grey", 0x808080);
        m.insert("indigo", 0x4b0082);
        m.insert("khaki", 0xf0e68c);
        m.insert("lime", 0x00ff00);
        m.insert("magenta", 0xff00ff);
        m.insert("maroon", 0x800000);
        m.insert("navy", 0x000080);
        m.insert("olive", 0x808000);
        m.insert("orange", 0xffa500);
        m.insert("pink", 0xffc0cb);
        m.insert("purple", 0x800080);
        m.insert("red", 0xff0000);
        m.insert("salmon", 0xfa8072);
        m.insert("silver", 0xc0c0c0);
        m.insert("teal", 0x008080);
        m.insert("turquoise", 0x40e0d0);
        m.insert("violet", 0xee82ee);
        m.insert("white", 0xffffff);
        m.insert("yellow", 0xffff00);
        m
    };
}

/// Parses a color from a `#rgb` / `#rrggbb` hex string or a CSS keyword.
///
/// Case-insensitive. Returns `None` for anything unrecognized, which is what
/// lets callers tell "not a color" from any particular fallback color.
pub fn parse(text: &str) -> Option<Rgb> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }
    let packed = NAMED_COLORS.get(text.to_ascii_lowercase().as_str())?;
    Some(from_packed(*packed))
}

/// Formats a color as `#rrggbb`.
pub fn to_hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", to_u8(c.r), to_u8(c.g), to_u8(c.b))
}

/// Decomposes a color into draw channels for the given space.
pub fn to_channels(c: Rgb, space: ColorSpace) -> [f64; 3] {
    match space {
        ColorSpace::Hsl => {
            let hsl = rgb_to_hsl(c);
            [hsl.h, hsl.s, hsl.l]
        }
        ColorSpace::Rgb => [c.r, c.g, c.b],
    }
}

/// Recombines draw channels into a color.
pub fn from_channels(ch: [f64; 3], space: ColorSpace) -> Rgb {
    match space {
        ColorSpace::Hsl => hsl_to_rgb(Hsl {
            h: ch[0],
            s: ch[1],
            l: ch[2],
        }),
        ColorSpace::Rgb => Rgb {
            r: ch[0],
            g: ch[1],
            b: ch[2],
        },
    }
}

/// RGB → HSL, all channels in `0.0..=1.0`.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is undefined, default to 0.
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == c.r {
        ((c.g - c.b) / d + if c.g < c.b { 6.0 } else { 0.0 }) / 6.0
    } else if max == c.g {
        ((c.b - c.r) / d + 2.0) / 6.0
    } else {
        ((c.r - c.g) / d + 4.0) / 6.0
    };

    Hsl { h, s, l }
}

/// HSL → RGB, all channels in `0.0..=1.0`. Hue wraps.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    if c.s <= 0.0 {
        return Rgb {
            r: c.l,
            g: c.l,
            b: c.l,
        };
    }

    let q = if c.l < 0.5 {
        c.l * (1.0 + c.s)
    } else {
        c.l + c.s - c.l * c.s
    };
    let p = 2.0 * c.l - q;

    Rgb {
        r: hue_to_rgb(p, q, c.h + 1.0 / 3.0),
        g: hue_to_rgb(p, q, c.h),
        b: hue_to_rgb(p, q, c.h - 1.0 / 3.0),
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn parse_hex(s: &str) -> Option<Rgb> {
    match s.len() {
        // #rgb
        3 => {
            let r = parse_hex_digit(s.as_bytes()[0])?;
            let g = parse_hex_digit(s.as_bytes()[1])?;
            let b = parse_hex_digit(s.as_bytes()[2])?;
            Some(from_bytes(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #rrggbb
        6 => {
            let r = parse_hex_byte(&s.as_bytes()[0..2])?;
            let g = parse_hex_byte(&s.as_bytes()[2..4])?;
            let b = parse_hex_byte(&s.as_bytes()[4..6])?;
            Some(from_bytes(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

fn from_packed(packed: u32) -> Rgb {
    from_bytes(
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    )
}

fn from_bytes(r: u8, g: u8, b: u8) -> Rgb {
    Rgb {
        r: f64::from(r) / 255.0,
        g: f64::from(g) / 255.0,
        b: f64::from(b) / 255.0,
    }
}

/// Float channel (`0.0..=1.0`) to `u8` with correct rounding.
#[inline]
fn to_u8(v: f64) -> u8 {
    (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}
