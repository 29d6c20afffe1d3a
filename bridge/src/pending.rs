use std::collections::HashMap;

use log::warn;

use steambind_shared::{CallHandle, CallKind};

/// In-flight call-result requests, keyed by the SDK-issued handle.
///
/// Each entry resolves exactly once. There is no retry and no
/// cancellation; a pending request can only be completed by the SDK.
#[derive(Debug, Default)]
pub(crate) struct PendingCalls {
    calls: HashMap<CallHandle, CallKind>,
}

impl PendingCalls {
    pub fn track(&mut self, handle: CallHandle, kind: CallKind) {
        if !handle.is_valid() {
            warn!("sdk returned the invalid call handle for a {kind:?} request; completion will never arrive");
            return;
        }
        if let Some(previous) = self.calls.insert(handle, kind) {
            warn!(
                "call handle {} reissued while a {previous:?} request was still pending",
                handle.raw()
            );
        }
    }

    /// Removes and returns the pending kind, so a second completion for
    /// the same handle resolves to `None`.
    pub fn resolve(&mut self, handle: CallHandle) -> Option<CallKind> {
        self.calls.remove(&handle)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.calls.len()
    }
}
