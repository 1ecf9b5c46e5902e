//! Identifiers for the things a shared session talks about.
//!
//! Each id is a `u32` newtype so a participant can never be passed where a
//! creature is expected.  `u32::MAX` is reserved as the "unset" value, which
//! is also what `Default` yields.

use std::fmt;

macro_rules! session_ids {
    ($($(#[$attr:meta])* $name:ident;)+) => {$(
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// The reserved "unset" id.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    )+};
}

session_ids! {
    /// A creature driven by the controller.
    AgentId;

    /// A participant of a shared session (one per connected player).
    ///
    /// Exactly one participant holds authority over a given agent at a time.
    ParticipantId;

    /// An object of interest the creature can perceive (e.g. a pointer dot).
    TargetId;
}
