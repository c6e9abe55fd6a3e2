//! Dialog continuation gate for slot-collecting intents.

use memo_types::DialogState;

/// Whether a slot-bearing intent may execute this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogGate {
    /// Slot collection is still in progress; hand control back to the
    /// platform without touching any state.
    Delegate,
    /// All slots are filled; run the handler body.
    Proceed,
}

/// The platform re-sends the full dialog state each turn, so the gate keeps
/// no state of its own.
pub fn continuation(state: Option<DialogState>) -> DialogGate {
    match state {
        Some(DialogState::Completed) => DialogGate::Proceed,
        _ => DialogGate::Delegate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_completed_dialogs_proceed() {
        assert_eq!(continuation(Some(DialogState::Completed)), DialogGate::Proceed);
        assert_eq!(continuation(Some(DialogState::Started)), DialogGate::Delegate);
        assert_eq!(
            continuation(Some(DialogState::InProgress)),
            DialogGate::Delegate
        );
        assert_eq!(continuation(None), DialogGate::Delegate);
    }
}
