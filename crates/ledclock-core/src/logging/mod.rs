//! Multi-sink diagnostic log pipeline.
//!
//! One composed line goes to all three sinks unconditionally: the local
//! console, the remote collector, and the in-memory history the web UI
//! serves back. There are no levels and no per-sink filtering; sinks are
//! fire-and-forget and must not block the caller.
//!
//! This is the *device* log stream shown to the operator. Internal
//! developer diagnostics use the `log` crate facade as everywhere else.

pub mod history;
pub mod line;

use core::fmt::Write;

use crate::calendar::Calendar;
use crate::time::ClockSource;

pub use history::{LogHistory, MAX_HISTORY};
pub use line::{LineBuffer, MAX_LINE};

/// Local console, e.g. the UART on hardware or stdout in the simulator.
pub trait ConsoleSink {
    /// Writes one full line; the sink owns the line terminator.
    fn write_line(&mut self, line: &str);
}

/// Remote log collector over an unreliable transport.
///
/// Delivery is best-effort: implementations swallow errors, never retry,
/// and never block indefinitely.
pub trait RemoteSink {
    fn send(&mut self, tag: &str, message: &str);
}

/// Console sink that discards everything.
pub struct NullConsole;

impl ConsoleSink for NullConsole {
    fn write_line(&mut self, _line: &str) {}
}

/// Remote sink for devices with no collector configured.
pub struct NullRemote;

impl RemoteSink for NullRemote {
    fn send(&mut self, _tag: &str, _message: &str) {}
}

/// Composes log lines and fans them out to the three sinks.
pub struct Logger<C: ConsoleSink, R: RemoteSink> {
    console: C,
    remote: R,
    history: LogHistory,
}

impl<C: ConsoleSink, R: RemoteSink> Logger<C, R> {
    pub fn new(console: C, remote: R) -> Self {
        Self {
            console,
            remote,
            history: LogHistory::new(),
        }
    }

    /// Composes `"<timestamp> - <tag>: <message>"` and dispatches it.
    ///
    /// The line is built in a bounded buffer (overlong messages truncate
    /// silently) and clamped to Latin-1-safe characters before any sink
    /// sees it. Dispatch order: console (full line), remote collector
    /// (message portion only, tag passed separately), history (full line).
    ///
    /// The [`device_log!`] macro is the usual entry point.
    pub fn log<K: ClockSource>(
        &mut self,
        calendar: &mut Calendar,
        clock: &K,
        tag: &str,
        args: core::fmt::Arguments<'_>,
    ) {
        let mut line = LineBuffer::new();
        write!(line, "{} - {}: ", calendar.format_date_time(clock), tag).ok();

        // The clamp below maps characters 1:1, so the char count locates
        // the message portion even if byte offsets shift.
        let prefix_chars = line.as_str().chars().count();

        write!(line, "{}", args).ok();
        line.latin1_clamp();

        let full = line.as_str();
        self.console.write_line(full);

        let message_start = full
            .char_indices()
            .nth(prefix_chars)
            .map(|(i, _)| i)
            .unwrap_or(full.len());
        self.remote.send(tag, &full[message_start..]);

        self.history.append(full);
    }

    /// The retained log lines, for the web UI.
    pub fn history(&self) -> &LogHistory {
        &self.history
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }
}

/// Formats and dispatches one device log line.
///
/// ```ignore
/// device_log!(logger, calendar, clock, "WIFI", "connected to {}", ssid);
/// ```
#[macro_export]
macro_rules! device_log {
    ($logger:expr, $calendar:expr, $clock:expr, $tag:expr, $($arg:tt)+) => {
        $logger.log($calendar, $clock, $tag, ::core::format_args!($($arg)+))
    };
}
