//! Desktop simulator for the ledclock-rs clock face and logging pipeline.
//!
//! Renders the ledclock-core time/date strings to the terminal at 1 Hz and
//! wires the device log pipeline to real sinks: stdout stands in for the
//! UART console, an optional UDP socket for the remote collector.
//!
//! # Usage
//!
//! | Argument       | Meaning                                    |
//! |----------------|--------------------------------------------|
//! | `<path>`       | Config file (`key=value` lines) to load    |
//! | `--ticks <n>`  | Stop after n seconds instead of running on |
//!
//! Interesting config keys: `segments`, `lang`, `day_names_long`,
//! `day_names_short`, `timezone`, `syslog` (collector `host:port`).

use std::net::UdpSocket;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::{info, warn};
use rand::RngCore;
use rand::rngs::ThreadRng;

use ledclock_core::calendar::Calendar;
use ledclock_core::config::{ConfigStore, KEY_TIMEZONE, MemoryStore};
use ledclock_core::device_log;
use ledclock_core::logging::{ConsoleSink, Logger, RemoteSink};
use ledclock_core::time::{ClockSource, LocalTime};
use ledclock_core::uuid::{RandomSource, generate_uuid};

// ---------------------------------------------------------------------------
// Simulation constants
// ---------------------------------------------------------------------------

/// One display refresh per second, like the hardware tick.
const TICK: Duration = Duration::from_secs(1);

/// Heartbeat log interval, in ticks.
const HEARTBEAT_TICKS: u64 = 10;

/// Configuration used when no config file is given.
const DEMO_CONFIG: &str = "\
# ledclock demo configuration
segments=6
lang=de
timezone=1
";

// ---------------------------------------------------------------------------
// Collaborator implementations
// ---------------------------------------------------------------------------

/// OS wall clock with the configured fixed UTC offset.
struct SystemClock {
    utc_offset_secs: i32,
}

impl ClockSource for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn local(&self, now: i64) -> LocalTime {
        LocalTime::from_epoch(now, self.utc_offset_secs)
    }
}

/// Stdout stands in for the device UART.
struct StdoutConsole;

impl ConsoleSink for StdoutConsole {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Fire-and-forget UDP collector sink, silent when unconfigured.
struct UdpCollector {
    socket: Option<(UdpSocket, String)>,
}

impl UdpCollector {
    fn new(target: Option<&str>) -> Self {
        let socket = target.and_then(|target| match UdpSocket::bind("0.0.0.0:0") {
            Ok(socket) => Some((socket, target.to_string())),
            Err(e) => {
                warn!("collector socket unavailable: {}", e);
                None
            }
        });

        Self { socket }
    }
}

impl RemoteSink for UdpCollector {
    fn send(&mut self, tag: &str, message: &str) {
        if let Some((socket, target)) = &self.socket {
            // user.info priority, delivery best-effort
            let datagram = format!("<14>{}: {}", tag, message);
            let _ = socket.send_to(datagram.as_bytes(), target.as_str());
        }
    }
}

/// Host RNG behind the core's `RandomSource` seam.
struct HostRng {
    rng: ThreadRng,
}

impl RandomSource for HostRng {
    fn next32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting ledclock simulator");

    // --- Arguments --------------------------------------------------------
    let mut config_path: Option<String> = None;
    let mut max_ticks: Option<u64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ticks" => max_ticks = args.next().and_then(|v| v.parse().ok()),
            other => config_path = Some(other.to_string()),
        }
    }

    // --- Configuration ----------------------------------------------------
    let mut cfg = MemoryStore::new();
    let accepted = match &config_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => cfg.load_from_str(&text),
            Err(e) => {
                warn!("cannot read {}: {}; using demo configuration", path, e);
                cfg.load_from_str(DEMO_CONFIG)
            }
        },
        None => cfg.load_from_str(DEMO_CONFIG),
    };
    info!("Configuration: {} entries", accepted);

    // --- Wiring -----------------------------------------------------------
    let clock = SystemClock {
        utc_offset_secs: cfg.get_int(KEY_TIMEZONE) * 3_600,
    };
    let mut calendar = Calendar::new();
    let mut logger = Logger::new(StdoutConsole, UdpCollector::new(cfg.get("syslog")));
    let mut rng = HostRng {
        rng: rand::thread_rng(),
    };

    let session = generate_uuid(&mut rng);
    device_log!(logger, &mut calendar, &clock, "UTL", "boot, session {}", session);

    // --- Main loop --------------------------------------------------------
    let mut tick: u64 = 0;
    loop {
        let frame_start = Instant::now();

        let time = calendar.format_time(&clock, &cfg);
        let date = calendar.format_date(&clock, &cfg);
        println!("[{:>8}] {}", time.as_str(), date.as_str());

        if tick % HEARTBEAT_TICKS == 0 && tick > 0 {
            let uptime = calendar.data_source(&clock, &cfg, "UPTIME");
            device_log!(logger, &mut calendar, &clock, "UTL", "alive, up {}", uptime);
        }

        tick += 1;
        if let Some(max) = max_ticks {
            if tick >= max {
                break;
            }
        }

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < TICK {
            std::thread::sleep(TICK - elapsed);
        }
    }

    // --- Shutdown ---------------------------------------------------------
    let history = logger.history().snapshot();
    info!("Simulator exiting; {} log lines retained", history.len());
    for line in history {
        info!("history: {}", line);
    }
}
