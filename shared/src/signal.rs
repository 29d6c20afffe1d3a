use crate::steam_id::SteamId;
use crate::types::CallKind;

/// Host-native value as carried in a signal's positional field list.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    U8(u8),
    U32(u32),
    I32(i32),
    U64(u64),
    Bool(bool),
    Text(String),
    IdList(Vec<SteamId>),
}

/// One outward event per asynchronous SDK notification.
///
/// Field order and types are the compatibility contract with host
/// scripts; [`fields`](Signal::fields) marshals them in exactly the
/// documented order.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    LobbyCreated {
        result: i32,
        lobby: SteamId,
    },
    LobbyJoined {
        lobby: SteamId,
        permissions: u32,
        locked: bool,
        response: u32,
    },
    LobbyMatchList {
        lobbies: Vec<SteamId>,
    },
    LobbyDataUpdate {
        success: u8,
        lobby: SteamId,
        member: SteamId,
    },
    LobbyChatUpdate {
        lobby: SteamId,
        changed: SteamId,
        making_change: SteamId,
        chat_state: u32,
    },
    LobbyChatMessage {
        lobby: SteamId,
        user: SteamId,
        message: String,
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
    /// A call-result request completed with an I/O failure and no
    /// payload.
    CallResultFailed {
        call: CallKind,
    },
}

impl Signal {
    pub fn name(&self) -> &'static str {
        match self {
            Signal::LobbyCreated { .. } => "lobby_created",
            Signal::LobbyJoined { .. } => "lobby_joined",
            Signal::LobbyMatchList { .. } => "lobby_match_list",
            Signal::LobbyDataUpdate { .. } => "lobby_data_update",
            Signal::LobbyChatUpdate { .. } => "lobby_chat_update",
            Signal::LobbyChatMessage { .. } => "lobby_chat_message",
            Signal::LobbyInvite { .. } => "lobby_invite",
            Signal::LobbyJoinRequested { .. } => "lobby_join_requested",
            Signal::P2pSessionRequest { .. } => "p2p_session_request",
            Signal::P2pSessionConnectFail { .. } => "p2p_session_connect_fail",
            Signal::CallResultFailed { .. } => "call_result_failed",
        }
    }

    /// Positional field list in the documented emission order.
    pub fn fields(&self) -> Vec<Value> {
        match self {
            Signal::LobbyCreated { result, lobby } => {
                vec![Value::I32(*result), Value::U64(lobby.raw())]
            }
            Signal::LobbyJoined {
                lobby,
                permissions,
                locked,
                response,
            } => vec![
                Value::U64(lobby.raw()),
                Value::U32(*permissions),
                Value::Bool(*locked),
                Value::U32(*response),
            ],
            Signal::LobbyMatchList { lobbies } => vec![Value::IdList(lobbies.clone())],
            Signal::LobbyDataUpdate {
                success,
                lobby,
                member,
            } => vec![
                Value::U8(*success),
                Value::U64(lobby.raw()),
                Value::U64(member.raw()),
            ],
            Signal::LobbyChatUpdate {
                lobby,
                changed,
                making_change,
                chat_state,
            } => vec![
                Value::U64(lobby.raw()),
                Value::U64(changed.raw()),
                Value::U64(making_change.raw()),
                Value::U32(*chat_state),
            ],
            Signal::LobbyChatMessage {
                lobby,
                user,
                message,
                chat_type,
            } => vec![
                Value::U64(lobby.raw()),
                Value::U64(user.raw()),
                Value::Text(message.clone()),
                Value::U8(*chat_type),
            ],
            Signal::LobbyInvite {
                inviter,
                lobby,
                game,
            } => vec![
                Value::U64(inviter.raw()),
                Value::U64(lobby.raw()),
                Value::U64(*game),
            ],
            Signal::LobbyJoinRequested { lobby, friend } => {
                vec![Value::U64(lobby.raw()), Value::U64(friend.raw())]
            }
            Signal::P2pSessionRequest { remote } => vec![Value::U64(remote.raw())],
            Signal::P2pSessionConnectFail {
                remote,
                session_error,
            } => vec![Value::U64(remote.raw()), Value::U8(*session_error)],
            Signal::CallResultFailed { call } => vec![Value::U8(call.code())],
        }
    }
}
