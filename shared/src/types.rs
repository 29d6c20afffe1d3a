/// Handle issued by the SDK for an in-flight asynchronous request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallHandle(u64);

impl CallHandle {
    pub const INVALID: CallHandle = CallHandle(0);

    pub fn new(raw: u64) -> Self {
        CallHandle(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Which asynchronous request a call result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
    CreateLobby,
    LobbyList,
}

impl CallKind {
    /// Code carried by the `call_result_failed` signal.
    pub fn code(self) -> u8 {
        match self {
            CallKind::CreateLobby => 0,
            CallKind::LobbyList => 1,
        }
    }
}
