use thiserror::Error;

use steambind_shared::CallKind;

/// Errors raised while marshaling an SDK notification into a signal.
/// These are logged at the pump boundary and suppress the signal; they
/// never reach the host surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Completion arrived for a handle no pending request owns
    #[error("call handle {handle} is not tracked by any pending request; completion dropped")]
    UntrackedCallHandle { handle: u64 },

    /// Completion payload does not match the pending request's kind
    #[error("call result payload does not match the pending {kind:?} request; completion dropped")]
    MismatchedCallResult { kind: CallKind },

    /// A subsystem became unavailable between callback delivery and dispatch
    #[error("matchmaking subsystem unavailable while handling {callback}; notification dropped")]
    SubsystemUnavailable { callback: &'static str },
}
