#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonMonitor`**: Tracks one push button's debounced state, press count and double-clicks
//! - **`ButtonPin`**: Trait to implement for your input hardware (GPIO expander, native pin, ...)
//! - **`TimeSource`**: Trait to implement for your monotonic millisecond clock
//! - **`Level`**: Digital logic level (`Low`/`High`)
//! - **`PinMode`**: Input configuration applied at construction (`Input`/`InputPullup`)
//! - **`CountMode`**: Which confirmed transitions increment the press counter
//! - **`UsageMode`**: Which of the two mutually exclusive entry points an instance serves
//!
//! The monitor is caller-driven: call `poll()` (or `check_double_click()`)
//! periodically from your own control loop. No internal timer, thread or
//! interrupt handler exists, and no method blocks.

pub mod monitor;
pub mod time;
pub mod types;

pub use monitor::{ButtonMonitor, ButtonPin, MonitorError, UsageMode};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{CountMode, Level, PinMode};

/// Maximum gap between two presses that still counts as a double-click, in
/// milliseconds.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 500;

/// Default intended interval between `poll()` calls, in microseconds.
pub const DEFAULT_POLL_INTERVAL_MICROS: u64 = 1_000;
