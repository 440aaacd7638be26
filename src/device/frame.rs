//! Telemetry frame parsing
//!
//! The board prints one frame per sample:
//!
//! ```text
//! <temperature>\n
//! <gyro_x> <gyro_y> <gyro_z>\n
//! <accel_x> <accel_y> <accel_z>\n
//! <left_button> <right_button>\n
//! ```
//!
//! Fields are matched in order and written straight into the caller's
//! [`Reading`]. Matching stops at the first field that does not parse, so
//! every later field keeps whatever value it had from an earlier frame.

/// Number of numeric fields in a complete frame
pub const FIELD_COUNT: usize = 9;

/// Three-axis integer sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Axes3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Axes3 {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Latest known device state
///
/// Buttons are active-low: 0 means pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature: f32,
    pub gyro: Axes3,
    pub accel: Axes3,
    pub left_button: i32,
    pub right_button: i32,
}

impl Default for Reading {
    /// Zeroed sensors with both buttons released, so nothing clicks before
    /// the first frame arrives
    fn default() -> Self {
        Self {
            temperature: 0.0,
            gyro: Axes3::default(),
            accel: Axes3::default(),
            left_button: 1,
            right_button: 1,
        }
    }
}

/// Parse a raw read into `reading`, returning how many fields matched.
///
/// The payload ends at the first NUL byte. Unmatched fields are left as they
/// were; an empty buffer leaves `reading` untouched.
pub fn parse_frame(raw: &[u8], reading: &mut Reading) -> usize {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    let payload = &raw[..end];
    let text = match std::str::from_utf8(payload) {
        Ok(text) => text,
        Err(e) => {
            // Keep the valid prefix, garbage after it just stops matching
            let valid = &payload[..e.valid_up_to()];
            std::str::from_utf8(valid).unwrap_or_default()
        }
    };

    let mut scanner = Scanner::new(text);
    let mut matched = 0;

    macro_rules! field {
        ($scan:ident, $slot:expr) => {
            match scanner.$scan() {
                Some(value) => {
                    $slot = value;
                    matched += 1;
                }
                None => return matched,
            }
        };
    }

    field!(float, reading.temperature);
    field!(int, reading.gyro.x);
    field!(int, reading.gyro.y);
    field!(int, reading.gyro.z);
    field!(int, reading.accel.x);
    field!(int, reading.accel.y);
    field!(int, reading.accel.z);
    field!(int, reading.left_button);
    field!(int, reading.right_button);

    matched
}

/// Cursor over frame text that pulls numbers off the front
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    }

    /// Length of the leading run of ASCII digits in `s`
    fn digits(s: &str) -> usize {
        s.bytes().take_while(u8::is_ascii_digit).count()
    }

    fn sign(s: &str) -> usize {
        usize::from(s.starts_with(['+', '-']))
    }

    fn int(&mut self) -> Option<i32> {
        self.skip_whitespace();
        let sign = Self::sign(self.rest);
        let digits = Self::digits(&self.rest[sign..]);
        if digits == 0 {
            return None;
        }
        let len = sign + digits;
        let value = self.rest[..len].parse().ok()?;
        self.rest = &self.rest[len..];
        Some(value)
    }

    fn float(&mut self) -> Option<f32> {
        self.skip_whitespace();
        let s = self.rest;
        let mut len = Self::sign(s);

        let whole = Self::digits(&s[len..]);
        len += whole;
        let mut frac = 0;
        if s[len..].starts_with('.') {
            frac = Self::digits(&s[len + 1..]);
            if whole + frac > 0 {
                len += 1 + frac;
            }
        }
        if whole + frac == 0 {
            return None;
        }

        // Exponent only counts when digits follow it
        if s[len..].starts_with(['e', 'E']) {
            let exp_sign = Self::sign(&s[len + 1..]);
            let exp_digits = Self::digits(&s[len + 1 + exp_sign..]);
            if exp_digits > 0 {
                len += 1 + exp_sign + exp_digits;
            }
        }

        let value = s[..len].parse().ok()?;
        self.rest = &s[len..];
        Some(value)
    }
}
