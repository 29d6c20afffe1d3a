use log::warn;

use steambind_shared::{
    CallKind, LobbyComparison, LobbyDistanceFilter, LobbyType, SendKind, SignalSink, SteamId,
};

use crate::api::SteamApi;
use crate::config::BindingConfig;
use crate::pending::PendingCalls;

/// A P2P packet handed to the host: payload sized to the bytes actually
/// read, plus the sender's id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct P2pPacket {
    pub data: Vec<u8>,
    pub remote: SteamId,
}

/// Facade translating host calls into SDK calls and SDK callbacks into
/// host signals.
///
/// All methods execute synchronously on the caller's thread. Asynchronous
/// completions are delivered only from [`run_callbacks`](Self::run_callbacks),
/// which the host invokes once per frame/tick. The uniform failure policy
/// is the SDK's own: when a subsystem accessor reports unavailable, the
/// operation returns its type-appropriate sentinel (nil id, empty string,
/// false, zero, `None`) and emits nothing.
pub struct SteamBinding {
    pub(crate) api: Box<dyn SteamApi>,
    pub(crate) pending: PendingCalls,
    pub(crate) config: BindingConfig,
}

impl SteamBinding {
    pub fn new(api: Box<dyn SteamApi>) -> Self {
        Self::with_config(api, BindingConfig::default())
    }

    pub fn with_config(api: Box<dyn SteamApi>, config: BindingConfig) -> Self {
        Self {
            api,
            pending: PendingCalls::default(),
            config,
        }
    }

    /// Attempts SDK startup. Idempotency across repeated calls is the
    /// SDK's contract, not this layer's.
    pub fn init(&mut self) -> bool {
        self.api.init()
    }

    /// Drains queued SDK notifications and emits each as exactly one
    /// signal into `sink`. Never blocks; notifications are processed one
    /// at a time in the order the SDK presents them.
    pub fn run_callbacks(&mut self, sink: &mut dyn SignalSink) {
        for notification in self.api.run_callbacks() {
            if let Err(error) = self.dispatch(notification, sink) {
                warn!("dropped sdk callback: {error}");
            }
        }
    }

    // User ---------------------------------------------------------------

    /// Id of the locally signed-in user, nil when unavailable.
    pub fn steam_id(&self) -> SteamId {
        match self.api.user() {
            Some(user) => user.steam_id(),
            None => SteamId::nil(),
        }
    }

    /// Local display name, empty when unavailable.
    pub fn persona_name(&self) -> String {
        match self.api.friends() {
            Some(friends) => friends.persona_name(),
            None => String::new(),
        }
    }

    /// Display name of another user. Triggers an asynchronous profile
    /// fetch when the data is not yet resident and returns an empty
    /// string until it is; callers re-query later rather than receiving a
    /// completion signal.
    pub fn friend_persona_name(&mut self, user: SteamId) -> String {
        if user.is_nil() {
            return String::new();
        }
        let Some(friends) = self.api.friends_mut() else {
            return String::new();
        };
        if friends.request_user_information(user, true) {
            // Still loading.
            return String::new();
        }
        friends.friend_persona_name(user)
    }

    // Lobby --------------------------------------------------------------

    /// Issues an asynchronous lobby-creation request. Exactly one
    /// `lobby_created` signal follows per request; an I/O failure emits
    /// `call_result_failed` instead.
    pub fn create_lobby(&mut self, lobby_type: LobbyType, max_members: u32) {
        let Some(matchmaking) = self.api.matchmaking_mut() else {
            return;
        };
        let handle = matchmaking.create_lobby(lobby_type, max_members);
        self.pending.track(handle, CallKind::CreateLobby);
    }

    /// [`create_lobby`](Self::create_lobby) with the configured default
    /// member cap.
    pub fn create_lobby_with_default_size(&mut self, lobby_type: LobbyType) {
        let members = self.config.default_lobby_members;
        self.create_lobby(lobby_type, members);
    }

    pub fn set_lobby_data(&mut self, lobby: SteamId, key: &str, value: &str) -> bool {
        match self.api.matchmaking_mut() {
            Some(matchmaking) => matchmaking.set_lobby_data(lobby, key, value),
            None => false,
        }
    }

    /// Fire-and-forget; completion is observed via the `lobby_joined`
    /// signal.
    pub fn join_lobby(&mut self, lobby: SteamId) {
        if let Some(matchmaking) = self.api.matchmaking_mut() {
            matchmaking.join_lobby(lobby);
        }
    }

    /// Fire-and-forget; no completion signal exists for leaving.
    pub fn leave_lobby(&mut self, lobby: SteamId) {
        if let Some(matchmaking) = self.api.matchmaking_mut() {
            matchmaking.leave_lobby(lobby);
        }
    }

    /// Issues an asynchronous lobby search. Exactly one
    /// `lobby_match_list` signal follows per request, carrying lobby ids
    /// in SDK enumeration order.
    pub fn request_lobby_list(&mut self) {
        let Some(matchmaking) = self.api.matchmaking_mut() else {
            return;
        };
        let handle = matchmaking.request_lobby_list();
        self.pending.track(handle, CallKind::LobbyList);
    }

    /// Stages a string filter applied to the next
    /// [`request_lobby_list`](Self::request_lobby_list) call only.
    pub fn add_request_lobby_list_string_filter(
        &mut self,
        key: &str,
        value: &str,
        comparison: LobbyComparison,
    ) {
        if let Some(matchmaking) = self.api.matchmaking_mut() {
            matchmaking.add_string_filter(key, value, comparison);
        }
    }

    /// Stages a distance filter applied to the next
    /// [`request_lobby_list`](Self::request_lobby_list) call only.
    pub fn add_request_lobby_list_distance_filter(&mut self, filter: LobbyDistanceFilter) {
        if let Some(matchmaking) = self.api.matchmaking_mut() {
            matchmaking.add_distance_filter(filter);
        }
    }

    pub fn lobby_owner(&self, lobby: SteamId) -> SteamId {
        match self.api.matchmaking() {
            Some(matchmaking) => matchmaking.lobby_owner(lobby),
            None => SteamId::nil(),
        }
    }

    pub fn num_lobby_members(&self, lobby: SteamId) -> u32 {
        match self.api.matchmaking() {
            Some(matchmaking) => matchmaking.num_lobby_members(lobby),
            None => 0,
        }
    }

    /// Member id at `index`; the index is caller-supplied and unchecked
    /// beyond what the SDK enforces.
    pub fn lobby_member_by_index(&self, lobby: SteamId, index: u32) -> SteamId {
        match self.api.matchmaking() {
            Some(matchmaking) => matchmaking.lobby_member_by_index(lobby, index),
            None => SteamId::nil(),
        }
    }

    /// Sends the message body plus a trailing NUL terminator, the wire
    /// shape host scripts rely on.
    pub fn send_lobby_chat_message(&mut self, lobby: SteamId, body: &str) -> bool {
        let Some(matchmaking) = self.api.matchmaking_mut() else {
            return false;
        };
        let mut encoded = Vec::with_capacity(body.len() + 1);
        encoded.extend_from_slice(body.as_bytes());
        encoded.push(0);
        matchmaking.send_chat_message(lobby, &encoded)
    }

    // P2P ----------------------------------------------------------------

    pub fn accept_p2p_session(&mut self, remote: SteamId) -> bool {
        match self.api.networking_mut() {
            Some(networking) => networking.accept_session(remote),
            None => false,
        }
    }

    pub fn allow_p2p_packet_relay(&mut self, allow: bool) -> bool {
        match self.api.networking_mut() {
            Some(networking) => networking.allow_packet_relay(allow),
            None => false,
        }
    }

    pub fn close_p2p_session(&mut self, remote: SteamId) -> bool {
        match self.api.networking_mut() {
            Some(networking) => networking.close_session(remote),
            None => false,
        }
    }

    /// Size of the next queued packet on `channel`, 0 when none is queued
    /// or the subsystem is unavailable.
    pub fn available_p2p_packet_size(&self, channel: i32) -> u32 {
        match self.api.networking() {
            Some(networking) => networking.available_packet_size(channel).unwrap_or(0),
            None => 0,
        }
    }

    /// Reads the next queued packet into a buffer of `max_size` bytes.
    /// The returned payload is truncated to the byte count actually read,
    /// so a stale size query can never leave stale bytes in the result.
    pub fn read_p2p_packet(&mut self, max_size: u32, channel: i32) -> Option<P2pPacket> {
        let networking = self.api.networking_mut()?;
        let mut data = vec![0u8; max_size as usize];
        let read = networking.read_packet(&mut data, channel)?;
        data.truncate(read.copied);
        Some(P2pPacket {
            data,
            remote: read.sender,
        })
    }

    pub fn send_p2p_packet(
        &mut self,
        remote: SteamId,
        data: &[u8],
        send_kind: SendKind,
        channel: i32,
    ) -> bool {
        match self.api.networking_mut() {
            Some(networking) => networking.send_packet(remote, data, send_kind, channel),
            None => false,
        }
    }
}
