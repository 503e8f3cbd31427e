//! Per-mode business logic abstraction.

/// Trait for the logic behind a single operating mode.
///
/// Implement this once per mode your device supports. The interface owns no
/// handler; it borrows them for its whole lifetime and dispatches to the one
/// selected by the current mode.
///
/// An entry dialogue is always address first, then value: `process_value` is
/// only ever called with an address that `validate_address` on the same
/// handler accepted.
pub trait ModeHandler {
    /// Checks whether `candidate` is a usable address for this mode.
    ///
    /// Called as soon as the operator enters an address and before any value
    /// is known. Returning `false` cancels the dialogue. Keep it free of
    /// observable side effects.
    fn validate_address(&self, candidate: u32) -> bool;

    /// Applies `value` to a previously validated `address`.
    ///
    /// Returns `false` when the value is invalid for the address or the
    /// resulting operation failed. A failure must leave the handler in a
    /// usable state; the interface discards the address either way.
    fn process_value(&mut self, address: u32, value: u8) -> bool;
}

impl<H: ModeHandler + ?Sized> ModeHandler for &mut H {
    #[inline]
    fn validate_address(&self, candidate: u32) -> bool {
        (**self).validate_address(candidate)
    }

    #[inline]
    fn process_value(&mut self, address: u32, value: u8) -> bool {
        (**self).process_value(address, value)
    }
}
