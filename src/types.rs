//! Core types reported by the operator interface.

/// Result of a button release.
///
/// Exactly one outcome is produced per release. Mode changes and accepted
/// entries are ordinary control flow, so everything is reported here rather
/// than through an error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventOutcome {
    /// Short press with no pending address. The next mode is now active.
    ModeChange,

    /// Long press whose selector value the active mode accepted as an address.
    AddressAccepted,

    /// Long press whose selector value the active mode refused as an address.
    AddressRejected,

    /// Short press whose value the active mode applied to the pending address.
    ValueAccepted,

    /// Short press whose value the active mode failed to apply.
    ///
    /// The pending address is discarded as well; the operator must start over
    /// with a new address.
    ValueRejected,
}

impl EventOutcome {
    /// Returns true for the two rejection outcomes.
    #[inline]
    pub fn is_rejection(&self) -> bool {
        matches!(self, EventOutcome::AddressRejected | EventOutcome::ValueRejected)
    }
}

/// The dialogue state of an operator interface.
///
/// Derived from the interface's fields on demand; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceState {
    /// No address pending. A short press cycles the mode.
    Idle {
        /// Index of the active mode.
        mode: usize,
    },
    /// An address was accepted. A short press supplies its value.
    AwaitingValue {
        /// Index of the active mode.
        mode: usize,
        /// The accepted address.
        address: u32,
    },
}

impl InterfaceState {
    /// Returns the active mode index.
    #[inline]
    pub fn mode(&self) -> usize {
        match *self {
            InterfaceState::Idle { mode } | InterfaceState::AwaitingValue { mode, .. } => mode,
        }
    }
}

/// Construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceError {
    /// No mode handlers provided.
    NoModes,

    /// Handler list capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::NoModes => {
                write!(f, "operator interface needs at least one mode handler")
            }
            InterfaceError::CapacityExceeded => {
                write!(f, "mode handler capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterfaceError {}
