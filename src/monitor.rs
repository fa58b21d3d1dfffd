//! Debounced button monitoring with press counting and double-click detection.
//!
//! Provides [`ButtonMonitor`] which maintains a debounced view of one digital
//! input, counting confirmed press/release transitions and optionally
//! detecting double-click gestures. Also defines the [`ButtonPin`] trait for
//! hardware abstraction.

use crate::DOUBLE_CLICK_WINDOW_MS;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{CountMode, Level, PinMode};

/// The logic level a press drives the pin to. Buttons are assumed to be
/// wired active-low (pull-up, switch to ground).
const ACTIVE_PRESS_LEVEL: Level = Level::Low;

/// Trait for abstracting the button's input hardware.
///
/// Implement this for whatever provides the digital input (an SPI GPIO
/// expander driver, a native GPIO pin, a shift register, etc.). The
/// implementation captures everything needed to address the pin - chip
/// select, pin number and so on - so the monitor never sees those details.
pub trait ButtonPin {
    /// Configures the pin as an input. Called once, from the constructor.
    fn configure(&mut self, mode: PinMode);

    /// Performs a synchronous digital read of the pin.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    /// An implementation backed by a fallible bus should absorb read errors
    /// and return a defined level (for an active-low button, the idle
    /// [`Level::High`] is the safe choice).
    fn read(&mut self) -> Level;
}

/// Which of the two mutually exclusive entry points this monitor serves.
///
/// The debounce/count path ([`ButtonMonitor::poll`]) and the double-click
/// path ([`ButtonMonitor::check_double_click`]) keep incompatible transient
/// state and must not be interleaved on one instance. The first of the two
/// to run latches the mode for the lifetime of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UsageMode {
    /// Neither entry point has run yet.
    Unused,
    /// Driven by `poll()`: debounced state, press counting, press/release
    /// queries.
    Polling,
    /// Driven by `check_double_click()`.
    DoubleClick,
}

/// Errors that can occur during monitor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError {
    /// An entry point was called on an instance already latched to the
    /// other usage mode.
    UsageConflict {
        /// The mode the called operation requires.
        requested: UsageMode,
        /// The mode the instance is latched to.
        active: UsageMode,
    },
}

impl core::fmt::Display for MonitorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MonitorError::UsageConflict { requested, active } => {
                write!(
                    f,
                    "usage conflict: operation requires {:?} mode, but monitor is latched to {:?}",
                    requested, active
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MonitorError {}

/// Maintains a debounced view of one push button.
///
/// Each monitor owns its pin and derives press counting or double-click
/// detection from raw level reads. It is caller-driven: call [`poll`] (or
/// [`check_double_click`]) periodically from your control loop; no internal
/// timer or interrupt handler exists.
///
/// Construction performs one synchronous read and seeds all level state from
/// it, so the first observed transition is never a spurious edge.
///
/// All timing is derived from the supplied [`TimeSource`]; the default
/// debounce duration is zero (no filtering).
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Pin implementation type
/// * `T` - Time source implementation type
///
/// [`poll`]: ButtonMonitor::poll
/// [`check_double_click`]: ButtonMonitor::check_double_click
pub struct ButtonMonitor<'t, I: TimeInstant, P: ButtonPin, T: TimeSource<I>> {
    pin: P,
    time_source: &'t T,
    debounce_duration: I::Duration,
    count_mode: CountMode,
    press_count: u32,

    // Debounce path: last electrical level, when it last changed, and the
    // two most recent confirmed stable levels.
    raw_state: Level,
    raw_changed_at: I,
    stable_state: Level,
    previous_stable_state: Level,

    // Double-click path keeps its own flicker tracker so the two entry
    // points never share transient state.
    click_level: Level,
    pending_click_at: Option<I>,

    usage: UsageMode,
    poll_interval_micros: u64,
}

impl<'t, I: TimeInstant, P: ButtonPin, T: TimeSource<I>> ButtonMonitor<'t, I, P, T> {
    /// Creates a monitor for a plain floating input pin.
    ///
    /// Equivalent to [`with_pin_mode`](Self::with_pin_mode) with
    /// [`PinMode::Input`].
    pub fn new(pin: P, time_source: &'t T) -> Self {
        Self::with_pin_mode(pin, PinMode::Input, time_source)
    }

    /// Creates a monitor, configuring the pin with the given mode.
    ///
    /// Configures the pin through [`ButtonPin::configure`], then performs one
    /// synchronous read to initialize the raw and stable levels.
    pub fn with_pin_mode(mut pin: P, mode: PinMode, time_source: &'t T) -> Self {
        pin.configure(mode);
        let level = pin.read();
        let now = time_source.now();

        Self {
            pin,
            time_source,
            debounce_duration: I::Duration::ZERO,
            count_mode: CountMode::default(),
            press_count: 0,
            raw_state: level,
            raw_changed_at: now,
            stable_state: level,
            previous_stable_state: level,
            click_level: level,
            pending_click_at: None,
            usage: UsageMode::Unused,
            poll_interval_micros: crate::DEFAULT_POLL_INTERVAL_MICROS,
        }
    }

    /// Sets the minimum time a raw level must hold before it is trusted.
    ///
    /// Zero (the default) disables filtering entirely: every raw change is
    /// promoted to stable on the next poll. Takes effect on the next
    /// qualifying poll; a pending transition is not re-validated.
    pub fn set_debounce_duration(&mut self, duration: I::Duration) {
        self.debounce_duration = duration;
    }

    /// Returns the configured debounce duration.
    pub fn debounce_duration(&self) -> I::Duration {
        self.debounce_duration
    }

    /// Sets which confirmed transitions increment the press counter.
    ///
    /// Does not retroactively reclassify the current count.
    pub fn set_count_mode(&mut self, mode: CountMode) {
        self.count_mode = mode;
    }

    /// Returns the configured counting mode.
    pub fn count_mode(&self) -> CountMode {
        self.count_mode
    }

    /// Sets the intended interval between `poll()` calls, in microseconds.
    ///
    /// Stored for the embedding application's benefit; `poll()` does not
    /// currently rate-limit itself with it.
    // TODO: enforce this inside poll() once the time traits grow a
    // microsecond-resolution accessor.
    pub fn set_poll_interval_micros(&mut self, micros: u64) {
        self.poll_interval_micros = micros;
    }

    /// Returns the intended interval between `poll()` calls, in microseconds.
    pub fn poll_interval_micros(&self) -> u64 {
        self.poll_interval_micros
    }

    /// Samples the pin and advances the debounce state machine.
    ///
    /// Must be invoked periodically from the embedding application's control
    /// loop. Each call:
    ///
    /// 1. Reads the current level.
    /// 2. On any raw change, restarts the debounce window. This is a
    ///    level-stability filter, not a single-edge timer: any flicker
    ///    resets the clock.
    /// 3. Once the raw level has held for at least the debounce duration,
    ///    promotes it to the stable level, shifting the previous stable
    ///    level down. A stable change is therefore detected on the poll
    ///    *after* the window elapses.
    /// 4. Classifies the (previous, current) stable pair against the
    ///    counting mode and increments the press counter on a match.
    ///
    /// # Errors
    /// [`MonitorError::UsageConflict`] if this instance is latched to
    /// double-click mode.
    pub fn poll(&mut self) -> Result<(), MonitorError> {
        self.enter_mode(UsageMode::Polling)?;

        let now = self.time_source.now();
        let current = self.pin.read();

        if current != self.raw_state {
            self.raw_changed_at = now;
            self.raw_state = current;
        }

        let held_for = now.duration_since(self.raw_changed_at);
        if held_for.as_millis() >= self.debounce_duration.as_millis() {
            self.previous_stable_state = self.stable_state;
            self.stable_state = self.raw_state;
        }

        if self.previous_stable_state != self.stable_state {
            let counts = match self.count_mode {
                CountMode::Both => true,
                CountMode::Falling => {
                    self.previous_stable_state == Level::High && self.stable_state == Level::Low
                }
                CountMode::Rising => {
                    self.previous_stable_state == Level::Low && self.stable_state == Level::High
                }
            };
            if counts {
                self.press_count += 1;
            }
        }

        Ok(())
    }

    /// Returns the debounced level as last computed by [`poll`].
    ///
    /// Does not read hardware.
    ///
    /// [`poll`]: ButtonMonitor::poll
    pub fn stable_state(&self) -> Level {
        self.stable_state
    }

    /// Performs a fresh, undebounced hardware read.
    ///
    /// Bypasses all filtering state; intended for diagnostics and real-time
    /// display. Must not be used to drive counting logic. Allowed in either
    /// usage mode.
    pub fn immediate_state(&mut self) -> Level {
        self.pin.read()
    }

    /// Returns true if the most recent confirmed transition was a press
    /// (high to low).
    ///
    /// Level-valued, not edge-latched: stays true until the next [`poll`]
    /// computes a different transition snapshot, so callers polling faster
    /// than transitions occur will observe repeated `true` results.
    ///
    /// [`poll`]: ButtonMonitor::poll
    pub fn is_pressed(&self) -> bool {
        self.previous_stable_state == Level::High && self.stable_state == Level::Low
    }

    /// Returns true if the most recent confirmed transition was a release
    /// (low to high). Symmetric to [`is_pressed`](Self::is_pressed).
    pub fn is_released(&self) -> bool {
        self.previous_stable_state == Level::Low && self.stable_state == Level::High
    }

    /// Returns the number of presses counted so far.
    pub fn press_count(&self) -> u32 {
        self.press_count
    }

    /// Resets the press counter to zero.
    pub fn clear_press_count(&mut self) {
        self.press_count = 0;
    }

    /// Returns the usage mode this instance is latched to.
    pub fn usage_mode(&self) -> UsageMode {
        self.usage
    }

    /// Samples the pin and reports whether a double-click just completed.
    ///
    /// A double-click is two transitions to the press level with an
    /// inter-press gap of at most [`DOUBLE_CLICK_WINDOW_MS`] milliseconds.
    /// A pending first click times out once the window elapses with no
    /// second press.
    ///
    /// No debouncing is applied on this path - raw level changes drive it
    /// directly, so electrical bounce can register spurious clicks. This
    /// matches the original design and is preserved as documented behavior.
    ///
    /// A known quirk is likewise preserved: a second press arriving *after*
    /// the window has elapsed does not re-arm as a fresh first click within
    /// the same call. The trailing timeout check clears the stale pending
    /// click instead, so only the next press starts a new window.
    ///
    /// [`DOUBLE_CLICK_WINDOW_MS`]: crate::DOUBLE_CLICK_WINDOW_MS
    ///
    /// # Errors
    /// [`MonitorError::UsageConflict`] if this instance is latched to
    /// polling mode.
    pub fn check_double_click(&mut self) -> Result<bool, MonitorError> {
        self.enter_mode(UsageMode::DoubleClick)?;

        let current = self.pin.read();
        let now = self.time_source.now();
        let mut double_clicked = false;

        if current != self.click_level {
            self.click_level = current;

            if current == ACTIVE_PRESS_LEVEL {
                match self.pending_click_at {
                    None => {
                        self.pending_click_at = Some(now);
                    }
                    Some(first) => {
                        if now.duration_since(first).as_millis() <= DOUBLE_CLICK_WINDOW_MS {
                            double_clicked = true;
                            self.pending_click_at = None;
                        }
                    }
                }
            }
        }

        // Expire a pending first click that never got its second press.
        if let Some(first) = self.pending_click_at {
            if now.duration_since(first).as_millis() > DOUBLE_CLICK_WINDOW_MS {
                self.pending_click_at = None;
            }
        }

        Ok(double_clicked)
    }

    /// Latches the instance to `requested`, or fails if it is already
    /// latched to the other entry point.
    fn enter_mode(&mut self, requested: UsageMode) -> Result<(), MonitorError> {
        match self.usage {
            UsageMode::Unused => {
                self.usage = requested;
                Ok(())
            }
            active if active == requested => Ok(()),
            active => Err(MonitorError::UsageConflict { requested, active }),
        }
    }
}
