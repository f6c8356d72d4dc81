//! Key-value configuration store and `key=value` line parsing.
//!
//! The store's persistence (flash filesystem on hardware, a plain file in
//! the simulator) belongs to the surrounding firmware; this module owns the
//! line contract and the in-memory mapping. Absent keys are never an error:
//! callers get `None` or a coerced default.

use alloc::collections::BTreeMap;
use alloc::string::String;

use log::debug;

/// Display width proxy (number of LED segment groups).
pub const KEY_SEGMENTS: &str = "segments";
/// Two-letter language code for the built-in weekday tables.
pub const KEY_LANG: &str = "lang";
/// Operator override: 7 comma-separated long weekday names.
pub const KEY_DAY_NAMES_LONG: &str = "day_names_long";
/// Operator override: 7 comma-separated short weekday names.
pub const KEY_DAY_NAMES_SHORT: &str = "day_names_short";
/// UTC offset of the display, in hours.
pub const KEY_TIMEZONE: &str = "timezone";

/// Read access to the configuration mapping.
pub trait ConfigStore {
    /// Value for `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<&str>;

    /// Value for `key` coerced to an integer.
    ///
    /// Uses leading-integer coercion: an absent or unparsable value is 0,
    /// matching how the original display firmware read numeric settings.
    fn get_int(&self, key: &str) -> i32 {
        leading_int(self.get(key).unwrap_or_default())
    }
}

/// Splits one configuration line into key and value.
///
/// Blank lines and `#` comments yield `None`. The first `=` separates key
/// from value; a line without `=` is a bare key with an empty value. No
/// escaping, no trimming.
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    match line.find('=') {
        Some(pos) => Some((&line[..pos], &line[pos + 1..])),
        None => Some((line, "")),
    }
}

/// Parses the integer prefix of `s`: optional leading whitespace and sign,
/// then digits. Anything else (or nothing) coerces to 0.
pub fn leading_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut value: i64 = 0;
    let mut any = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        any = true;
        value = value * 10 + (b - b'0') as i64;
        if value > i32::MAX as i64 + 1 {
            break;
        }
    }

    if !any {
        return 0;
    }
    let value = if negative { -value } else { value };
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// In-memory configuration mapping, loaded from `key=value` text.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a single value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.into(), value.into());
    }

    /// Drop all stored values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Replace the store contents from configuration text.
    ///
    /// Lines with an empty value are skipped, as are comments and blanks.
    /// Returns the number of accepted entries.
    pub fn load_from_str(&mut self, text: &str) -> usize {
        self.clear();

        let mut accepted = 0;
        for line in text.lines() {
            let Some((key, value)) = split_line(line) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            debug!("config: {} = '{}'", key, value);
            self.set(key, value);
            accepted += 1;
        }

        accepted
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
