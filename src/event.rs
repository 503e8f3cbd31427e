//! Typed button edges.

/// A debounced edge from the operator's button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The button went down.
    Pressed,
    /// The button came up while the selector read this value.
    Released(u8),
}

impl ButtonEvent {
    /// Builds an event from a raw `(pressed, value)` pair.
    ///
    /// `value` is ignored for presses.
    #[inline]
    pub fn from_edge(pressed: bool, value: u8) -> Self {
        if pressed {
            ButtonEvent::Pressed
        } else {
            ButtonEvent::Released(value)
        }
    }

    /// Returns true for [`ButtonEvent::Pressed`].
    #[inline]
    pub fn is_press(&self) -> bool {
        matches!(self, ButtonEvent::Pressed)
    }
}
