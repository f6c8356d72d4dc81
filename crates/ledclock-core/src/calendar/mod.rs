//! Time and date rendering for the segment display.
//!
//! [`Calendar`] owns the state the display path needs across calls: the
//! set-once start-up timestamp latch and the cached ISO-like datetime
//! string. Call sites hold one long-lived instance and pass it by reference;
//! nothing here hides behind statics.

pub mod locale;

use core::fmt::Write;

use alloc::string::String;

use crate::config::{
    ConfigStore, KEY_DAY_NAMES_LONG, KEY_DAY_NAMES_SHORT, KEY_LANG, KEY_SEGMENTS,
};
use crate::text::tokenize;
use crate::time::{format_delta_time, ClockSource};

/// Raw epoch values below this mean the clock has not synchronized yet.
const CLOCK_SYNC_THRESHOLD: i64 = 1_000_000;

/// Shown in place of the time while the clock is unsynchronized.
const TIME_PLACEHOLDER: &str = "??:??:??";

/// Rendered time, `HH:MM[:SS]` or the placeholder.
pub type TimeString = heapless::String<12>;

/// Rendered date, `<Day> <DD>/<MM>` with possibly custom day names.
pub type DateString = heapless::String<40>;

/// Formatter state for the clock face and the canonical log timestamp.
#[derive(Debug)]
pub struct Calendar {
    /// First valid timestamp seen, 0 while unset. Set once, never rewritten.
    start_up_time: i64,
    /// Cached `YYYY-MM-DDTHH:MM:SS`, recomputed at most once per second.
    cached_date_time: heapless::String<24>,
    /// Epoch second the cache was rendered for.
    cached_second: i64,
}

impl Calendar {
    pub fn new() -> Self {
        let mut cached_date_time = heapless::String::new();
        cached_date_time.push_str("1970-01-01T00:00:00").ok();

        Self {
            start_up_time: 0,
            cached_date_time,
            cached_second: 0,
        }
    }

    /// Renders the current time for the display.
    ///
    /// Returns `"??:??:??"` while the clock is unsynchronized (raw epoch
    /// below the sanity threshold). The first valid call records the
    /// start-up timestamp for [`Calendar::uptime`].
    ///
    /// Output is `HH:MM` on short displays (`segments <= 4`), `HH:MM:SS`
    /// otherwise; 24-hour, zero-padded, local time.
    pub fn format_time<C, S>(&mut self, clock: &C, cfg: &S) -> TimeString
    where
        C: ClockSource,
        S: ConfigStore,
    {
        let now = clock.now();

        let mut out = TimeString::new();
        if now < CLOCK_SYNC_THRESHOLD {
            out.push_str(TIME_PLACEHOLDER).ok();
            return out;
        }

        // First nonzero timestamp is close enough to the boot time
        if self.start_up_time == 0 {
            self.start_up_time = now;
        }

        let lt = clock.local(now);
        let short_display = cfg.get_int(KEY_SEGMENTS) <= 4;

        if short_display {
            write!(out, "{:02}:{:02}", lt.hour, lt.minute).ok();
        } else {
            write!(out, "{:02}:{:02}:{:02}", lt.hour, lt.minute, lt.second).ok();
        }
        out
    }

    /// Renders the current date as `<Day> <DD>/<MM>`.
    ///
    /// An epoch of exactly 0 yields an empty string (uninitialized clock).
    /// Day names come from a valid operator override when one is configured,
    /// otherwise from the built-in table for the configured language; both
    /// pick short names when `segments < 5`.
    pub fn format_date<C, S>(&self, clock: &C, cfg: &S) -> DateString
    where
        C: ClockSource,
        S: ConfigStore,
    {
        let now = clock.now();

        let mut out = DateString::new();
        if now == 0 {
            return out;
        }

        let lt = clock.local(now);
        let wd = lt.weekday as usize;
        let use_short = cfg.get_int(KEY_SEGMENTS) < 5;

        let table = locale::day_names(locale::language_index(
            cfg.get(KEY_LANG).unwrap_or_default(),
        ));
        let mut day_name: &str = if use_short {
            table.short_names[wd]
        } else {
            table.long_names[wd]
        };

        // A custom override replaces the whole table or nothing: both lists
        // must tokenize to exactly 7 entries.
        let custom_long = cfg.get(KEY_DAY_NAMES_LONG).unwrap_or_default();
        let custom_short = cfg.get(KEY_DAY_NAMES_SHORT).unwrap_or_default();
        let custom_days;
        if !custom_long.is_empty() && !custom_short.is_empty() {
            let long_days = tokenize(custom_long, ",");
            let short_days = tokenize(custom_short, ",");

            if long_days.len() == 7 && short_days.len() == 7 {
                custom_days = if use_short { short_days } else { long_days };
                day_name = &custom_days[wd];
            }
        }

        write!(out, "{} {:02}/{:02}", day_name, lt.day, lt.month).ok();
        out
    }

    /// Canonical `YYYY-MM-DDTHH:MM:SS` timestamp, used by the log pipeline.
    ///
    /// The string is cached and only re-rendered when the wall-clock second
    /// has moved since the previous call.
    pub fn format_date_time<C: ClockSource>(&mut self, clock: &C) -> &str {
        let now = clock.now();

        if now != self.cached_second {
            let lt = clock.local(now);
            self.cached_date_time.clear();
            write!(
                self.cached_date_time,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                lt.year, lt.month, lt.day, lt.hour, lt.minute, lt.second
            )
            .ok();
            self.cached_second = now;
        }

        &self.cached_date_time
    }

    /// Seconds since the clock first synchronized, 0 while it never has.
    pub fn uptime<C: ClockSource>(&self, clock: &C) -> i64 {
        if self.start_up_time == 0 {
            return 0;
        }
        clock.now() - self.start_up_time
    }

    /// Resolves a template placeholder for the web UI and display scroller.
    ///
    /// A non-empty configured value wins; otherwise the virtual keys
    /// `UPTIME` and `LANG` (case-insensitive) are computed here. Anything
    /// else yields `default`. Hardware-derived placeholders (IP, MAC, heap)
    /// are resolved by their own subsystems, not this formatter.
    pub fn data_source_with_default<C, S>(
        &self,
        clock: &C,
        cfg: &S,
        name: &str,
        default: &str,
    ) -> String
    where
        C: ClockSource,
        S: ConfigStore,
    {
        if let Some(value) = cfg.get(name) {
            if !value.is_empty() {
                return value.into();
            }
        }

        match name.to_uppercase().as_str() {
            "UPTIME" => format_delta_time(self.uptime(clock)),
            // The web UI stores the language as a numeric table index
            "LANG" => locale::language_code(cfg.get_int(KEY_LANG)).into(),
            _ => default.into(),
        }
    }

    /// [`Calendar::data_source_with_default`] with an empty-string default.
    pub fn data_source<C, S>(&self, clock: &C, cfg: &S, name: &str) -> String
    where
        C: ClockSource,
        S: ConfigStore,
    {
        self.data_source_with_default(clock, cfg, name, "")
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use crate::time::ManualClock;
    use alloc::string::ToString;

    // 2023-03-15 13:14:15 UTC, a Wednesday
    const WEDNESDAY_AFTERNOON: i64 = 1_678_886_055;

    fn store(pairs: &[(&str, &str)]) -> MemoryStore {
        let mut cfg = MemoryStore::new();
        for (k, v) in pairs {
            cfg.set(k, v);
        }
        cfg
    }

    #[test]
    fn test_format_time_placeholder_before_sync() {
        let mut cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(999_999);
        let cfg = MemoryStore::new();

        assert_eq!(cal.format_time(&clock, &cfg), "??:??:??");
        // The latch must not be set by an unsynchronized clock
        assert_eq!(cal.uptime(&clock), 0);
    }

    #[test]
    fn test_format_time_short_display() {
        let mut cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        let cfg = store(&[(KEY_SEGMENTS, "4")]);
        let time = cal.format_time(&clock, &cfg);
        assert_eq!(time, "13:14");
        assert_eq!(time.len(), 5);
    }

    #[test]
    fn test_format_time_long_display() {
        let mut cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        let cfg = store(&[(KEY_SEGMENTS, "5")]);
        let time = cal.format_time(&clock, &cfg);
        assert_eq!(time, "13:14:15");
        assert_eq!(time.len(), 8);
    }

    #[test]
    fn test_format_time_missing_segments_is_short() {
        let mut cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        // Absent key coerces to 0, which is a short display
        assert_eq!(cal.format_time(&clock, &MemoryStore::new()), "13:14");
    }

    #[test]
    fn test_start_up_latch_is_set_once() {
        let mut cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        let cfg = MemoryStore::new();

        clock.set(WEDNESDAY_AFTERNOON);
        cal.format_time(&clock, &cfg);

        clock.advance(30);
        cal.format_time(&clock, &cfg);
        assert_eq!(cal.uptime(&clock), 30);

        clock.advance(70);
        assert_eq!(cal.uptime(&clock), 100);
    }

    #[test]
    fn test_format_date_empty_when_uninitialized() {
        let cal = Calendar::new();
        let clock = ManualClock::new(0);

        assert_eq!(cal.format_date(&clock, &MemoryStore::new()), "");
    }

    #[test]
    fn test_format_date_german_long() {
        let cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        let cfg = store(&[(KEY_LANG, "de"), (KEY_SEGMENTS, "10")]);
        assert_eq!(cal.format_date(&clock, &cfg), "Mit 15/03");
    }

    #[test]
    fn test_format_date_german_short() {
        let cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        let cfg = store(&[(KEY_LANG, "de"), (KEY_SEGMENTS, "4")]);
        assert_eq!(cal.format_date(&clock, &cfg), "Mi 15/03");
    }

    #[test]
    fn test_format_date_unknown_language_falls_back() {
        let cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        let cfg = store(&[(KEY_LANG, "it"), (KEY_SEGMENTS, "10")]);
        assert_eq!(cal.format_date(&clock, &cfg), "Wed 15/03");
    }

    #[test]
    fn test_format_date_custom_override_short() {
        let cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        let cfg = store(&[
            (KEY_SEGMENTS, "3"),
            (KEY_DAY_NAMES_LONG, "AAA,BBB,CCC,DDD,EEE,FFF,GGG"),
            (KEY_DAY_NAMES_SHORT, "aa,bb,cc,dd,ee,ff,gg"),
        ]);
        assert_eq!(cal.format_date(&clock, &cfg), "dd 15/03");
    }

    #[test]
    fn test_format_date_custom_override_long() {
        let cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        let cfg = store(&[
            (KEY_SEGMENTS, "8"),
            (KEY_DAY_NAMES_LONG, "AAA,BBB,CCC,DDD,EEE,FFF,GGG"),
            (KEY_DAY_NAMES_SHORT, "aa,bb,cc,dd,ee,ff,gg"),
        ]);
        assert_eq!(cal.format_date(&clock, &cfg), "DDD 15/03");
    }

    #[test]
    fn test_format_date_override_with_wrong_count_is_rejected() {
        let cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        // Only six short names: the whole override is ignored
        let cfg = store(&[
            (KEY_LANG, "de"),
            (KEY_SEGMENTS, "3"),
            (KEY_DAY_NAMES_LONG, "AAA,BBB,CCC,DDD,EEE,FFF,GGG"),
            (KEY_DAY_NAMES_SHORT, "aa,bb,cc,dd,ee,ff"),
        ]);
        assert_eq!(cal.format_date(&clock, &cfg), "Mi 15/03");
    }

    #[test]
    fn test_format_date_override_needs_both_lists() {
        let cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        let cfg = store(&[
            (KEY_SEGMENTS, "3"),
            (KEY_DAY_NAMES_LONG, "AAA,BBB,CCC,DDD,EEE,FFF,GGG"),
        ]);
        assert_eq!(cal.format_date(&clock, &cfg), "We 15/03");
    }

    #[test]
    fn test_format_date_time_is_cached_within_a_second() {
        let mut cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        clock.set(WEDNESDAY_AFTERNOON);

        let first = cal.format_date_time(&clock).to_string();
        assert_eq!(first, "2023-03-15T13:14:15");
        assert_eq!(cal.format_date_time(&clock), first);

        clock.advance(1);
        assert_eq!(cal.format_date_time(&clock), "2023-03-15T13:14:16");
    }

    #[test]
    fn test_format_date_time_initial_cache() {
        let mut cal = Calendar::new();
        let clock = ManualClock::new(0);

        // now == 0 matches the pre-rendered epoch string
        assert_eq!(cal.format_date_time(&clock), "1970-01-01T00:00:00");
    }

    #[test]
    fn test_data_source_prefers_stored_value() {
        let cal = Calendar::new();
        let clock = ManualClock::new(0);
        let cfg = store(&[("uptime", "already set")]);

        assert_eq!(cal.data_source(&clock, &cfg, "uptime"), "already set");
    }

    #[test]
    fn test_data_source_uptime() {
        let mut cal = Calendar::new();
        let mut clock = ManualClock::new(0);
        let cfg = MemoryStore::new();

        assert_eq!(cal.data_source(&clock, &cfg, "UPTIME"), "00:00:00");

        clock.set(WEDNESDAY_AFTERNOON);
        cal.format_time(&clock, &cfg);
        clock.advance(3_661);
        assert_eq!(cal.data_source(&clock, &cfg, "UPTIME"), "01:01:01");
    }

    #[test]
    fn test_data_source_lang() {
        let cal = Calendar::new();
        let clock = ManualClock::new(0);

        let cfg = store(&[(KEY_LANG, "2")]);
        assert_eq!(cal.data_source(&clock, &cfg, "LANG"), "de");

        // Non-numeric values coerce to index 0
        let cfg = store(&[(KEY_LANG, "es")]);
        assert_eq!(cal.data_source(&clock, &cfg, "LANG"), "en");
    }

    #[test]
    fn test_data_source_unknown_key_uses_default() {
        let cal = Calendar::new();
        let clock = ManualClock::new(0);
        let cfg = MemoryStore::new();

        assert_eq!(
            cal.data_source_with_default(&clock, &cfg, "essid", "n/a"),
            "n/a"
        );
    }
}
