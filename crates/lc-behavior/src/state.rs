//! The creature's behavioral states.

/// Which behavior is active.  Exactly one at any time; there is no terminal
/// state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CreatureState {
    /// Has not seen the target for a while; turns lazily to random headings.
    #[default]
    Idle,
    /// Aware of the target; scans quickly, locks on when it is visible.
    Alert,
    /// Pounces at the target whenever grounded and the cooldown allows.
    Jump,
}

impl CreatureState {
    pub const ALL: [CreatureState; 3] = [CreatureState::Idle, CreatureState::Alert, CreatureState::Jump];

    /// Lowercase label for logs and replicated payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            CreatureState::Idle  => "idle",
            CreatureState::Alert => "alert",
            CreatureState::Jump  => "jump",
        }
    }
}

impl std::fmt::Display for CreatureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
