//! Enum codes for the P2P packet surface.

/// Delivery mode of an outgoing P2P packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SendKind {
    Unreliable = 0,
    UnreliableNoDelay = 1,
    Reliable = 2,
    ReliableWithBuffering = 3,
}

impl SendKind {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            1 => SendKind::UnreliableNoDelay,
            2 => SendKind::Reliable,
            3 => SendKind::ReliableWithBuffering,
            _ => SendKind::Unreliable,
        }
    }
}

/// Failure code carried by a `p2p_session_connect_fail` notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionError {
    None = 0,
    NotRunningApp = 1,
    NoRightsToApp = 2,
    DestinationNotLoggedIn = 3,
    Timeout = 4,
}

impl SessionError {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            1 => SessionError::NotRunningApp,
            2 => SessionError::NoRightsToApp,
            3 => SessionError::DestinationNotLoggedIn,
            4 => SessionError::Timeout,
            _ => SessionError::None,
        }
    }
}
