//! Process-local UUID generation.
//!
//! Renders four 32-bit random words through a v4-shaped template. The
//! session tokens this feeds are short-lived, so "looks random" is the
//! whole entropy contract; this is not a standards-conformant UUIDv4.

use core::fmt::Write;

/// Source of 32-bit random words, e.g. the SoC RNG peripheral.
pub trait RandomSource {
    fn next32(&mut self) -> u32;
}

/// `xxxxxxxx-xxxx-4xxx-8xxx-xxxxxxxxxxxx` rendering of four random words.
pub fn generate_uuid<R: RandomSource>(rng: &mut R) -> heapless::String<36> {
    let r1 = rng.next32();
    let r2 = rng.next32();
    let r3 = rng.next32();
    let r4 = rng.next32();

    let mut out = heapless::String::new();
    write!(
        out,
        "{:08x}-{:04x}-4{:03x}-8{:03x}-{:04x}{:08x}",
        r1,
        r2 >> 16,
        r2 & 0xFFF,
        r3 >> 20,
        r3 & 0xFFFF,
        r4
    )
    .ok();
    out
}
