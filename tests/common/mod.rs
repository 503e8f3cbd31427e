//! Shared test infrastructure for operator-interface integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use operator_interface::{
    EventOutcome, ModeHandler, OperatorInterface, TimeDuration, TimeInstant, TimeSource,
};

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

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Mode Handler
// ============================================================================

/// Scripted mode handler that records every call it receives
pub struct MockHandler {
    accept_addresses: bool,
    accept_values: bool,
    validated: RefCell<heapless::Vec<u32, 16>>,
    processed: heapless::Vec<(u32, u8), 16>,
}

impl MockHandler {
    pub fn new(accept_addresses: bool, accept_values: bool) -> Self {
        Self {
            accept_addresses,
            accept_values,
            validated: RefCell::new(heapless::Vec::new()),
            processed: heapless::Vec::new(),
        }
    }

    /// Accepts every address and every value
    pub fn accepting() -> Self {
        Self::new(true, true)
    }

    /// Rejects every address
    pub fn rejecting_addresses() -> Self {
        Self::new(false, true)
    }

    /// Accepts every address but rejects every value
    pub fn rejecting_values() -> Self {
        Self::new(true, false)
    }

    pub fn validated(&self) -> heapless::Vec<u32, 16> {
        self.validated.borrow().clone()
    }

    pub fn processed(&self) -> &[(u32, u8)] {
        &self.processed
    }
}

impl ModeHandler for MockHandler {
    fn validate_address(&self, candidate: u32) -> bool {
        let _ = self.validated.borrow_mut().push(candidate);
        self.accept_addresses
    }

    fn process_value(&mut self, address: u32, value: u8) -> bool {
        let _ = self.processed.push((address, value));
        self.accept_values
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Press at the current time, hold for `hold_ms`, then release with `value`
pub fn press_for<const M: usize>(
    interface: &mut OperatorInterface<'_, '_, TestInstant, MockTimeSource, M>,
    timer: &MockTimeSource,
    hold_ms: u64,
    value: u8,
) -> EventOutcome {
    interface.press();
    timer.advance(hold_ms);
    interface.release(value)
}
