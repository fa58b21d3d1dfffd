//! Shared test infrastructure for button-monitor integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_monitor::{ButtonPin, Level, PinMode, TimeDuration, TimeInstant, TimeSource};
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Mock pin whose level the test drives through a shared [`PinHandle`] after
/// the monitor has taken ownership of the pin itself.
pub struct SharedPin {
    level: Rc<Cell<Level>>,
    configured_mode: Rc<Cell<Option<PinMode>>>,
    reads: Rc<Cell<usize>>,
}

/// Test-side handle paired with a [`SharedPin`].
pub struct PinHandle {
    level: Rc<Cell<Level>>,
    configured_mode: Rc<Cell<Option<PinMode>>>,
    reads: Rc<Cell<usize>>,
}

impl SharedPin {
    pub fn new(initial: Level) -> (Self, PinHandle) {
        let level = Rc::new(Cell::new(initial));
        let configured_mode = Rc::new(Cell::new(None));
        let reads = Rc::new(Cell::new(0));
        let pin = SharedPin {
            level: level.clone(),
            configured_mode: configured_mode.clone(),
            reads: reads.clone(),
        };
        let handle = PinHandle {
            level,
            configured_mode,
            reads,
        };
        (pin, handle)
    }
}

impl PinHandle {
    /// Drive the electrical level the pin will report from now on.
    pub fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    pub fn configured_mode(&self) -> Option<PinMode> {
        self.configured_mode.get()
    }

    pub fn read_count(&self) -> usize {
        self.reads.get()
    }
}

impl ButtonPin for SharedPin {
    fn configure(&mut self, mode: PinMode) {
        self.configured_mode.set(Some(mode));
    }

    fn read(&mut self) -> Level {
        self.reads.set(self.reads.get() + 1);
        self.level.get()
    }
}

/// Mock pin that replays a fixed sequence of levels, one per read, then
/// repeats the final level. The first scripted level is consumed by the
/// constructor's seed read.
pub struct ScriptedPin {
    script: heapless::Vec<Level, 64>,
    position: usize,
}

impl ScriptedPin {
    pub fn new(levels: &[Level]) -> Self {
        Self {
            script: heapless::Vec::from_slice(levels).expect("script too long"),
            position: 0,
        }
    }
}

impl ButtonPin for ScriptedPin {
    fn configure(&mut self, _mode: PinMode) {}

    fn read(&mut self) -> Level {
        let level = self.script[self.position.min(self.script.len() - 1)];
        self.position += 1;
        level
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}
