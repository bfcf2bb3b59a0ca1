//! Default string/color blending collaborator.
//!
//! Model:
//! - An output string is parsed once, at configuration time, into a
//!   `StringTemplate`: static text chunks around numeric slots.
//! - Color syntax (named CSS colors, `#hex`, `rgb()`/`rgba()`) is
//!   normalized to `rgba(r, g, b, a)` during parsing, so its channels
//!   become ordinary numeric slots tagged for integer rendering.
//! - Two templates blend by lerping numeric slots pairwise; the static
//!   chunks must match exactly (checked when the range is built).
//!
//! Blending happens in plain RGB component space.

use crate::error::SpringError;

/// How a numeric slot renders after blending.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Slot {
    /// Any number appearing in the source string (e.g. `10.5px`).
    Free,
    /// A red/green/blue channel: clamped to [0, 255] and rounded.
    Channel,
    /// An alpha channel: clamped to [0, 1].
    Alpha,
}

/// A parsed, interpolable string: `statics.len() == numbers.len() + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct StringTemplate {
    statics: Vec<String>,
    numbers: Vec<f32>,
    slots: Vec<Slot>,
}

/// Common CSS color names. Channels in 0..255, alpha in 0..255.
const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("aqua", [0, 255, 255, 255]),
    ("black", [0, 0, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("brown", [165, 42, 42, 255]),
    ("coral", [255, 127, 80, 255]),
    ("crimson", [220, 20, 60, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("gold", [255, 215, 0, 255]),
    ("gray", [128, 128, 128, 255]),
    ("green", [0, 128, 0, 255]),
    ("grey", [128, 128, 128, 255]),
    ("indigo", [75, 0, 130, 255]),
    ("ivory", [255, 255, 240, 255]),
    ("khaki", [240, 230, 140, 255]),
    ("lavender", [230, 230, 250, 255]),
    ("lime", [0, 255, 0, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("navy", [0, 0, 128, 255]),
    ("olive", [128, 128, 0, 255]),
    ("orange", [255, 165, 0, 255]),
    ("pink", [255, 192, 203, 255]),
    ("plum", [221, 160, 221, 255]),
    ("purple", [128, 0, 128, 255]),
    ("red", [255, 0, 0, 255]),
    ("salmon", [250, 128, 114, 255]),
    ("silver", [192, 192, 192, 255]),
    ("tan", [210, 180, 140, 255]),
    ("teal", [0, 128, 128, 255]),
    ("transparent", [0, 0, 0, 0]),
    ("turquoise", [64, 224, 208, 255]),
    ("violet", [238, 130, 238, 255]),
    ("white", [255, 255, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
];

fn lookup_named(name: &str) -> Option<[u8; 4]> {
    let lower = name.to_ascii_lowercase();
    NAMED_COLORS
        .binary_search_by(|(n, _)| n.cmp(&lower.as_str()))
        .ok()
        .map(|i| NAMED_COLORS[i].1)
}

struct Builder {
    statics: Vec<String>,
    cur: String,
    numbers: Vec<f32>,
    slots: Vec<Slot>,
}

impl Builder {
    fn new() -> Self {
        Self {
            statics: Vec::new(),
            cur: String::new(),
            numbers: Vec::new(),
            slots: Vec::new(),
        }
    }

    fn text(&mut self, s: &str) {
        self.cur.push_str(s);
    }

    fn number(&mut self, v: f32, slot: Slot) {
        self.statics.push(std::mem::take(&mut self.cur));
        self.numbers.push(v);
        self.slots.push(slot);
    }

    /// Alpha stays a float so fractional `rgba()` alphas survive exactly;
    /// only the three color channels are 8-bit.
    fn color(&mut self, rgb: [u8; 3], alpha: f32) {
        self.text("rgba(");
        self.number(rgb[0] as f32, Slot::Channel);
        self.text(", ");
        self.number(rgb[1] as f32, Slot::Channel);
        self.text(", ");
        self.number(rgb[2] as f32, Slot::Channel);
        self.text(", ");
        self.number(alpha, Slot::Alpha);
        self.text(")");
    }

    fn finish(mut self) -> StringTemplate {
        self.statics.push(self.cur);
        StringTemplate {
            statics: self.statics,
            numbers: self.numbers,
            slots: self.slots,
        }
    }
}

/// Lex a decimal number (optional sign, optional fraction) at `start`.
fn lex_number(s: &str, start: usize) -> Option<(f32, usize)> {
    let bytes = s.as_bytes();
    let mut i = start;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > i + 1 {
            i = j;
            has_digits = true;
        }
    }
    if !has_digits {
        return None;
    }
    s[start..i].parse().ok().map(|v| (v, i))
}

/// Parse `( n, n, n [, n] )` after an `rgb`/`rgba` keyword.
fn lex_fn_args(s: &str, open: usize) -> Option<(Vec<f32>, usize)> {
    let bytes = s.as_bytes();
    if open >= bytes.len() || bytes[open] != b'(' {
        return None;
    }
    let mut args = Vec::with_capacity(4);
    let mut i = open + 1;
    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let (v, next) = lex_number(s, i)?;
        args.push(v);
        i = next;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i) {
            Some(b',') => i += 1,
            Some(b')') => {
                i += 1;
                break;
            }
            _ => return None,
        }
    }
    if args.len() == 3 || args.len() == 4 {
        Some((args, i))
    } else {
        None
    }
}

fn lex_hex_color(s: &str, hash: usize) -> Option<([u8; 4], usize)> {
    let bytes = s.as_bytes();
    let mut i = hash + 1;
    while i < bytes.len() && bytes[i].is_ascii_hexdigit() {
        i += 1;
    }
    let digits = &s[hash + 1..i];
    let full = |h: &str| u8::from_str_radix(h, 16).ok();
    let half = |c: u8| u8::from_str_radix(std::str::from_utf8(&[c, c]).ok()?, 16).ok();
    let rgba = match digits.len() {
        3 => [
            half(digits.as_bytes()[0])?,
            half(digits.as_bytes()[1])?,
            half(digits.as_bytes()[2])?,
            255,
        ],
        6 => [
            full(&digits[0..2])?,
            full(&digits[2..4])?,
            full(&digits[4..6])?,
            255,
        ],
        8 => [
            full(&digits[0..2])?,
            full(&digits[2..4])?,
            full(&digits[4..6])?,
            full(&digits[6..8])?,
        ],
        _ => return None,
    };
    Some((rgba, i))
}

impl StringTemplate {
    /// Parse a string output into a blendable template. Color syntax is
    /// normalized to `rgba(...)`; every other number becomes a free slot.
    pub fn parse(input: &str) -> Self {
        let bytes = input.as_bytes();
        let mut b = Builder::new();
        let mut i = 0;
        while i < bytes.len() {
            let c = bytes[i];
            if c.is_ascii_alphabetic() {
                let word_start = i;
                while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let word = &input[word_start..i];
                let lower = word.to_ascii_lowercase();
                if lower == "rgb" || lower == "rgba" {
                    if let Some((args, next)) = lex_fn_args(input, i) {
                        let a = args.get(3).copied().unwrap_or(1.0).clamp(0.0, 1.0);
                        b.color(
                            [
                                args[0].clamp(0.0, 255.0) as u8,
                                args[1].clamp(0.0, 255.0) as u8,
                                args[2].clamp(0.0, 255.0) as u8,
                            ],
                            a,
                        );
                        i = next;
                        continue;
                    }
                }
                // A word directly followed by `(` names a function
                // (`tan(45deg)`), never a color.
                match lookup_named(word) {
                    Some(rgba) if bytes.get(i) != Some(&b'(') => {
                        b.color([rgba[0], rgba[1], rgba[2]], rgba[3] as f32 / 255.0);
                    }
                    _ => b.text(word),
                }
            } else if c == b'#' {
                if let Some((rgba, next)) = lex_hex_color(input, i) {
                    // Hex alpha is 8-bit by syntax, so a/255 is as exact
                    // as the source form allows.
                    b.color([rgba[0], rgba[1], rgba[2]], rgba[3] as f32 / 255.0);
                    i = next;
                } else {
                    b.text("#");
                    i += 1;
                }
            } else if let Some((v, next)) = lex_number(input, i) {
                b.number(v, Slot::Free);
                i = next;
            } else {
                let ch = input[i..].chars().next().unwrap_or('\u{fffd}');
                b.text(&input[i..i + ch.len_utf8()]);
                i += ch.len_utf8();
            }
        }
        b.finish()
    }

    /// Whether two templates can blend: identical static chunks and slot
    /// roles, differing only in the numbers themselves.
    pub fn compatible(&self, other: &Self) -> bool {
        self.statics == other.statics && self.slots == other.slots
    }

    pub(crate) fn ensure_compatible(
        outputs: &[StringTemplate],
    ) -> Result<(), SpringError> {
        for (i, t) in outputs.iter().enumerate().skip(1) {
            if !outputs[0].compatible(t) {
                return Err(SpringError::IncompatibleStrings { left: 0, right: i });
            }
        }
        Ok(())
    }

    /// Blend two compatible templates at fraction `t` and render.
    pub fn blend(&self, other: &Self, t: f32) -> String {
        use std::fmt::Write as _;
        debug_assert!(self.compatible(other));
        let mut out = String::with_capacity(self.statics.iter().map(String::len).sum());
        for i in 0..self.numbers.len() {
            out.push_str(&self.statics[i]);
            let v = self.numbers[i] + (other.numbers[i] - self.numbers[i]) * t;
            match self.slots[i] {
                Slot::Free => {
                    let _ = write!(out, "{v}");
                }
                Slot::Channel => {
                    let _ = write!(out, "{}", v.clamp(0.0, 255.0).round() as u32);
                }
                Slot::Alpha => {
                    let _ = write!(out, "{}", v.clamp(0.0, 1.0));
                }
            }
        }
        out.push_str(&self.statics[self.numbers.len()]);
        out
    }
}
