#![allow(dead_code)]

//! Per-action async lifecycle. Each remote-backed action (save, password
//! change, account deletion, job application) owns one `ActionState`; the
//! in-flight guard means a second trigger while one is pending is ignored
//! outright — there is no queue and no automatic retry.

use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionState {
    Idle,
    InFlight,
    Failed(String),
    Succeeded,
}

impl ActionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, ActionState::InFlight)
    }
}

/// Atomically transitions Idle/Failed/Succeeded -> InFlight. Returns false
/// (and leaves the state untouched) if the action is already pending.
pub fn try_begin(state: &Mutex<ActionState>) -> bool {
    let mut guard = state.lock().expect("action state poisoned");
    if guard.is_in_flight() {
        return false;
    }
    *guard = ActionState::InFlight;
    true
}

pub fn finish(state: &Mutex<ActionState>, outcome: ActionState) {
    *state.lock().expect("action state poisoned") = outcome;
}

pub fn current(state: &Mutex<ActionState>) -> ActionState {
    state.lock().expect("action state poisoned").clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_blocks_while_in_flight() {
        let state = Mutex::new(ActionState::Idle);
        assert!(try_begin(&state));
        assert!(!try_begin(&state));
        finish(&state, ActionState::Succeeded);
        assert!(try_begin(&state));
    }

    #[test]
    fn test_failed_state_allows_retry() {
        let state = Mutex::new(ActionState::Failed("boom".to_string()));
        assert!(try_begin(&state));
        assert_eq!(current(&state), ActionState::InFlight);
    }
}
