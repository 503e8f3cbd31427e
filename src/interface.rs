//! Single-button operator interface with mode, address and value handling.
//!
//! Provides [`OperatorInterface`], which turns debounced press/release edges and
//! a selector reading into mode changes and two-stage address/value dialogues,
//! and [`InterfaceBuilder`] for assembling one.
//!
//! Press classification happens lazily on release: a press held for at least
//! [`LONG_PRESS_THRESHOLD_MS`] enters an address, anything shorter either
//! supplies the value for a pending address or cycles to the next mode.

use crate::event::ButtonEvent;
use crate::handler::ModeHandler;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{EventOutcome, InterfaceError, InterfaceState};
use heapless::Vec;

/// Press duration, in milliseconds, at or above which a release counts as long.
pub const LONG_PRESS_THRESHOLD_MS: u64 = 1000;

/// Revert interval used when none is configured.
pub const DEFAULT_REVERT_INTERVAL_MS: u64 = 30_000;

/// Interprets a single button and selector as an operator interface.
///
/// Mode `0` is the default mode. A short press while idle cycles through the
/// modes in handler order. A long press offers the selector value as an
/// address to the active mode; if accepted, the next short press offers the
/// selector value as the data for that address. With a non-zero revert
/// interval, [`tick`](Self::tick) falls back to mode `0` after a period
/// without presses.
///
/// The interface drives no hardware. Call [`handle_event`](Self::handle_event)
/// for every debounced edge and [`tick`](Self::tick) from the main loop.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `'h` - Lifetime of the mode handler borrows
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `M` - Maximum number of modes
pub struct OperatorInterface<'t, 'h, I: TimeInstant, T: TimeSource<I>, const M: usize> {
    handlers: Vec<&'h mut dyn ModeHandler, M>,
    time_source: &'t T,
    current_mode: usize,
    pending_address: Option<u32>,
    last_press: Option<I>,
    started_at: I,
    revert_interval: I::Duration,
}

impl<'t, 'h, I: TimeInstant, T: TimeSource<I>, const M: usize> OperatorInterface<'t, 'h, I, T, M> {
    /// Creates an idle interface in mode `0`.
    ///
    /// A zero `revert_interval` disables automatic reversion.
    ///
    /// # Errors
    /// * `InterfaceError::NoModes` - `handlers` is empty
    pub fn new(
        handlers: Vec<&'h mut dyn ModeHandler, M>,
        revert_interval: I::Duration,
        time_source: &'t T,
    ) -> Result<Self, InterfaceError> {
        if handlers.is_empty() {
            return Err(InterfaceError::NoModes);
        }

        debug!(
            "operator interface: {=usize} modes, revert after {=u64} ms",
            handlers.len(),
            revert_interval.as_millis()
        );

        Ok(Self {
            handlers,
            time_source,
            current_mode: 0,
            pending_address: None,
            last_press: None,
            started_at: time_source.now(),
            revert_interval,
        })
    }

    /// Creates a new interface builder.
    pub fn builder(time_source: &'t T) -> InterfaceBuilder<'t, 'h, I, T, M> {
        InterfaceBuilder::new(time_source)
    }

    /// Handles a raw button edge.
    ///
    /// `pressed` is true for a press and false for a release. `value` is the
    /// selector reading and only matters on release.
    ///
    /// # Returns
    /// * `None` - Press recorded
    /// * `Some(outcome)` - What the release did
    pub fn handle_event(&mut self, pressed: bool, value: u8) -> Option<EventOutcome> {
        self.handle(ButtonEvent::from_edge(pressed, value))
    }

    /// Handles a typed button edge. See [`handle_event`](Self::handle_event).
    pub fn handle(&mut self, event: ButtonEvent) -> Option<EventOutcome> {
        match event {
            ButtonEvent::Pressed => {
                self.press();
                None
            }
            ButtonEvent::Released(value) => Some(self.release(value)),
        }
    }

    /// Records a press. Only the press timestamp changes.
    pub fn press(&mut self) {
        self.last_press = Some(self.time_source.now());
        trace!("button pressed");
    }

    /// Handles a release with the selector reading `value`.
    ///
    /// A release with no recorded press counts as a long press.
    pub fn release(&mut self, value: u8) -> EventOutcome {
        let now = self.time_source.now();
        let long_press = match self.last_press {
            Some(pressed_at) => {
                now.duration_since(pressed_at).as_millis() >= LONG_PRESS_THRESHOLD_MS
            }
            None => true,
        };

        let outcome = if long_press {
            self.enter_address(u32::from(value))
        } else if let Some(address) = self.pending_address.take() {
            self.enter_value(address, value)
        } else {
            self.cycle_mode()
        };

        debug!(
            "release in mode {=usize}: {}",
            self.current_mode,
            outcome
        );
        outcome
    }

    /// Reverts to mode `0` with no pending address once the revert interval
    /// has passed since the last press.
    ///
    /// Before the first press the interval is measured from construction.
    /// Does nothing when the revert interval is zero. Call this regularly;
    /// calling it late only delays the revert.
    ///
    /// # Returns
    /// `true` if the revert condition held on this call
    pub fn tick(&mut self) -> bool {
        if self.revert_interval.is_zero() {
            return false;
        }

        let reference = self.last_press.unwrap_or(self.started_at);
        let inactive = self.time_source.now().duration_since(reference);
        if inactive.as_millis() <= self.revert_interval.as_millis() {
            return false;
        }

        if self.current_mode != 0 || self.pending_address.is_some() {
            debug!("inactive for {=u64} ms, reverting to mode 0", inactive.as_millis());
        }
        self.current_mode = 0;
        self.pending_address = None;
        true
    }

    /// Returns the active mode index.
    pub fn current_mode(&self) -> usize {
        self.current_mode
    }

    /// Returns the instant of the most recent press, if any.
    pub fn last_press_timestamp(&self) -> Option<I> {
        self.last_press
    }

    /// Returns the accepted address awaiting a value, if any.
    pub fn pending_address(&self) -> Option<u32> {
        self.pending_address
    }

    /// Returns true while an accepted address awaits its value.
    pub fn is_awaiting_value(&self) -> bool {
        self.pending_address.is_some()
    }

    /// Returns the current dialogue state.
    pub fn state(&self) -> InterfaceState {
        match self.pending_address {
            Some(address) => InterfaceState::AwaitingValue {
                mode: self.current_mode,
                address,
            },
            None => InterfaceState::Idle {
                mode: self.current_mode,
            },
        }
    }

    /// Returns the number of modes.
    pub fn mode_count(&self) -> usize {
        self.handlers.len()
    }

    /// Returns the configured revert interval.
    pub fn revert_interval(&self) -> I::Duration {
        self.revert_interval
    }

    fn enter_address(&mut self, candidate: u32) -> EventOutcome {
        if self.handlers[self.current_mode].validate_address(candidate) {
            self.pending_address = Some(candidate);
            EventOutcome::AddressAccepted
        } else {
            self.pending_address = None;
            EventOutcome::AddressRejected
        }
    }

    // Caller has already taken the pending address.
    fn enter_value(&mut self, address: u32, value: u8) -> EventOutcome {
        if self.handlers[self.current_mode].process_value(address, value) {
            EventOutcome::ValueAccepted
        } else {
            EventOutcome::ValueRejected
        }
    }

    fn cycle_mode(&mut self) -> EventOutcome {
        self.current_mode = (self.current_mode + 1) % self.handlers.len();
        self.pending_address = None;
        EventOutcome::ModeChange
    }
}

/// Builder for constructing operator interfaces.
///
/// Modes are numbered in the order they are added.
pub struct InterfaceBuilder<'t, 'h, I: TimeInstant, T: TimeSource<I>, const M: usize> {
    handlers: Vec<&'h mut dyn ModeHandler, M>,
    time_source: &'t T,
    revert_interval: I::Duration,
}

impl<'t, 'h, I: TimeInstant, T: TimeSource<I>, const M: usize> InterfaceBuilder<'t, 'h, I, T, M> {
    /// Creates a builder with no modes and the default revert interval.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            handlers: Vec::new(),
            time_source,
            revert_interval: I::Duration::from_millis(DEFAULT_REVERT_INTERVAL_MS),
        }
    }

    /// Adds the handler for the next mode.
    ///
    /// # Errors
    /// * `InterfaceError::CapacityExceeded` - `M` modes already added
    pub fn mode(mut self, handler: &'h mut dyn ModeHandler) -> Result<Self, InterfaceError> {
        self.handlers
            .push(handler)
            .map_err(|_| InterfaceError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets the inactivity interval after which the interface reverts to mode `0`.
    pub fn revert_interval(mut self, interval: I::Duration) -> Self {
        self.revert_interval = interval;
        self
    }

    /// Disables automatic reversion.
    pub fn never_revert(mut self) -> Self {
        self.revert_interval = I::Duration::ZERO;
        self
    }

    /// Builds the interface.
    ///
    /// # Errors
    /// * `InterfaceError::NoModes` - No mode was added
    pub fn build(self) -> Result<OperatorInterface<'t, 'h, I, T, M>, InterfaceError> {
        OperatorInterface::new(self.handlers, self.revert_interval, self.time_source)
    }
}
