//! # Steambind Shared
//! Identifier, enum-code, and signal types shared between the steambind
//! facade and its backends.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod constants;
mod lobby;
mod p2p;
mod result;
mod signal;
mod sink;
mod steam_id;
mod types;

pub use constants::{CHAT_ENTRY_BUFFER_BYTES, DEFAULT_LOBBY_MEMBERS};
pub use lobby::{
    chat_member_state_change, ChatEntryType, ChatRoomEnterResponse, LobbyComparison,
    LobbyDistanceFilter, LobbyType,
};
pub use p2p::{SendKind, SessionError};
pub use result::SteamResult;
pub use signal::{Signal, Value};
pub use sink::{SignalQueue, SignalSink};
pub use steam_id::{AccountType, IdParseError, SteamId, Universe, DESKTOP_INSTANCE};
pub use types::{CallHandle, CallKind};
