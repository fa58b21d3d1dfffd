//! Core configuration and signal-level types.

/// A digital logic level as read from the button pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic low. For an active-low wired button this is the pressed level.
    Low,

    /// Logic high.
    High,
}

impl Level {
    /// Returns true if the level is [`Level::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// Returns true if the level is [`Level::Low`].
    #[inline]
    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Input configuration applied to the pin at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Plain floating input.
    Input,

    /// Input with the internal pull-up resistor enabled.
    InputPullup,
}

impl Default for PinMode {
    fn default() -> Self {
        PinMode::Input
    }
}

/// Which confirmed stable transitions increment the press counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountMode {
    /// Count high-to-low transitions (presses of an active-low button).
    Falling,

    /// Count low-to-high transitions (releases of an active-low button).
    Rising,

    /// Count every confirmed transition, regardless of direction.
    Both,
}

impl Default for CountMode {
    fn default() -> Self {
        CountMode::Falling
    }
}
