//! The transition table.
//!
//! ```text
//!            visible   not visible
//! Idle   →   Alert     Idle
//! Alert  →   Jump      Idle
//! Jump   →   Jump      Alert
//! ```

use crate::{CreatureState, Intent};

/// Result of evaluating the table once.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub from: CreatureState,
    pub to:   CreatureState,
    /// `[ExitState(from), EnterState(to)]` when the state changes, else empty.
    pub effects: Vec<Intent>,
}

impl Transition {
    #[inline]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Next state for `state` given current target visibility.
pub fn next_state(state: CreatureState, visible: bool) -> CreatureState {
    use CreatureState::*;
    match (state, visible) {
        (Idle, true)   => Alert,
        (Idle, false)  => Idle,
        (Alert, true)  => Jump,
        (Alert, false) => Idle,
        (Jump, true)   => Jump,
        (Jump, false)  => Alert,
    }
}

/// Evaluate the table and collect the side effects of the change, if any.
pub fn transition(state: CreatureState, visible: bool) -> Transition {
    let to = next_state(state, visible);
    let effects = if to != state {
        vec![Intent::ExitState(state), Intent::EnterState(to)]
    } else {
        Vec::new()
    };
    Transition { from: state, to, effects }
}
