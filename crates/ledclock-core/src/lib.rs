//! Hardware-independent core library for ledclock-rs
//!
//! This crate contains all platform-agnostic logic for the LED wall clock:
//! locale-aware time/date formatting for the segment display, the bounded
//! multi-sink log pipeline (console, remote collector, in-memory history for
//! the web UI), the key-value configuration store, and the small text and
//! UUID helpers the rest of the firmware consumes.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod calendar;
pub mod config;
pub mod logging;
pub mod text;
pub mod time;
pub mod uuid;
