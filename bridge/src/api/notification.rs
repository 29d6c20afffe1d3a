use steambind_shared::{CallHandle, SteamId};

/// Raw asynchronous payloads surfaced by a backend's callback pump.
/// Field shapes mirror the SDK callback structs one to one; the facade
/// marshals each into exactly one outward [`Signal`](steambind_shared::Signal).
#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    LobbyEnter {
        lobby: SteamId,
        permissions: u32,
        locked: bool,
        response: u32,
    },
    LobbyDataUpdate {
        lobby: SteamId,
        member: SteamId,
        success: u8,
    },
    LobbyChatUpdate {
        lobby: SteamId,
        changed: SteamId,
        making_change: SteamId,
        chat_state: u32,
    },
    /// Announces a chat entry; the body is fetched during dispatch via
    /// [`MatchmakingAccess::chat_entry`](super::MatchmakingAccess::chat_entry).
    LobbyChatMessage {
        lobby: SteamId,
        user: SteamId,
        chat_id: i32,
        chat_type: u8,
    },
    LobbyInvite {
        inviter: SteamId,
        lobby: SteamId,
        game: u64,
    },
    LobbyJoinRequested {
        lobby: SteamId,
        friend: SteamId,
    },
    P2pSessionRequest {
        remote: SteamId,
    },
    P2pSessionConnectFail {
        remote: SteamId,
        session_error: u8,
    },
    /// Completion of a call-result request issued earlier.
    CallResult {
        handle: CallHandle,
        io_failure: bool,
        payload: CallResultPayload,
    },
}

/// Completion payload of a call-result request.
#[derive(Clone, Debug, PartialEq)]
pub enum CallResultPayload {
    LobbyCreated {
        result: i32,
        lobby: SteamId,
    },
    /// The matching lobbies are enumerated during dispatch via
    /// `lobby_by_index`.
    LobbyMatchList {
        lobby_count: u32,
    },
    /// An I/O failure arrives without a payload.
    None,
}
