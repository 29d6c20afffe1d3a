//! Capability traits forming the seam to the wrapped SDK.
//!
//! A backend hands the facade a boxed [`SteamApi`]. Every subsystem
//! accessor returns an `Option`; `None` means the subsystem is
//! unavailable right now (SDK not initialized, process launched outside
//! the expected runtime) and the facade degrades to a sentinel instead
//! of failing.

mod notification;

pub use notification::{CallResultPayload, Notification};

use steambind_shared::{
    CallHandle, ChatEntryType, LobbyComparison, LobbyDistanceFilter, LobbyType, SendKind, SteamId,
};

/// Result of a synchronous chat-entry fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    /// Bytes copied into the caller's buffer.
    pub copied: usize,
    pub sender: SteamId,
    pub entry_type: ChatEntryType,
}

/// Result of a P2P packet read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacketRead {
    /// Bytes copied into the caller's buffer.
    pub copied: usize,
    pub sender: SteamId,
}

/// Identity subsystem.
pub trait UserAccess {
    /// Id of the locally signed-in user.
    fn steam_id(&self) -> SteamId;
}

/// Friends/persona subsystem.
pub trait FriendsAccess {
    /// Display name of the local user.
    fn persona_name(&self) -> String;
    /// Starts an asynchronous profile fetch. Returns true while the data
    /// is still loading, false once it is resident.
    fn request_user_information(&mut self, user: SteamId, name_only: bool) -> bool;
    /// Display name of another user, empty until resident.
    fn friend_persona_name(&self, user: SteamId) -> String;
}

/// Lobby/matchmaking subsystem.
pub trait MatchmakingAccess {
    /// Issues an asynchronous lobby-creation request.
    fn create_lobby(&mut self, lobby_type: LobbyType, max_members: u32) -> CallHandle;
    /// Issues an asynchronous lobby search using the staged filters.
    fn request_lobby_list(&mut self) -> CallHandle;
    /// Stages a string filter for the next lobby search only.
    fn add_string_filter(&mut self, key: &str, value: &str, comparison: LobbyComparison);
    /// Stages a distance filter for the next lobby search only.
    fn add_distance_filter(&mut self, filter: LobbyDistanceFilter);
    fn set_lobby_data(&mut self, lobby: SteamId, key: &str, value: &str) -> bool;
    fn join_lobby(&mut self, lobby: SteamId);
    fn leave_lobby(&mut self, lobby: SteamId);
    /// Lobby id at `index` within the most recent search result.
    fn lobby_by_index(&self, index: u32) -> SteamId;
    fn lobby_owner(&self, lobby: SteamId) -> SteamId;
    fn num_lobby_members(&self, lobby: SteamId) -> u32;
    fn lobby_member_by_index(&self, lobby: SteamId, index: u32) -> SteamId;
    /// Sends raw chat bytes, terminator included.
    fn send_chat_message(&mut self, lobby: SteamId, body: &[u8]) -> bool;
    /// Copies a chat entry into `buffer`, truncating to its length.
    fn chat_entry(&self, lobby: SteamId, chat_id: i32, buffer: &mut [u8]) -> ChatEntry;
}

/// P2P packet subsystem.
pub trait NetworkingAccess {
    fn accept_session(&mut self, remote: SteamId) -> bool;
    fn allow_packet_relay(&mut self, allow: bool) -> bool;
    fn close_session(&mut self, remote: SteamId) -> bool;
    /// Size of the next queued packet on `channel`, if any.
    fn available_packet_size(&self, channel: i32) -> Option<u32>;
    /// Pops the next queued packet into `buffer`. `None` when no packet
    /// is queued.
    fn read_packet(&mut self, buffer: &mut [u8], channel: i32) -> Option<PacketRead>;
    fn send_packet(&mut self, remote: SteamId, data: &[u8], send_kind: SendKind, channel: i32)
        -> bool;
}

/// Capability provider for the wrapped SDK.
pub trait SteamApi {
    /// Attempts SDK startup; false when the runtime environment is
    /// unavailable.
    fn init(&mut self) -> bool;
    /// Drains queued asynchronous notifications. Never blocks.
    fn run_callbacks(&mut self) -> Vec<Notification>;

    fn user(&self) -> Option<&dyn UserAccess>;
    fn friends(&self) -> Option<&dyn FriendsAccess>;
    fn friends_mut(&mut self) -> Option<&mut dyn FriendsAccess>;
    fn matchmaking(&self) -> Option<&dyn MatchmakingAccess>;
    fn matchmaking_mut(&mut self) -> Option<&mut dyn MatchmakingAccess>;
    fn networking(&self) -> Option<&dyn NetworkingAccess>;
    fn networking_mut(&mut self) -> Option<&mut dyn NetworkingAccess>;
}
