//! Deterministic in-memory double for the SDK capability traits.
//!
//! `FakeSteamApi::new` returns the boxed-able backend plus a
//! [`FakeHandle`] sharing its state, so tests can script notifications,
//! toggle subsystem availability, and inspect recorded calls after the
//! facade has taken ownership of the backend.

use std::cell::{RefCell, RefMut};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use steambind::api::{
    ChatEntry, FriendsAccess, MatchmakingAccess, NetworkingAccess, Notification, PacketRead,
    SteamApi, UserAccess,
};
use steambind::SteamBinding;
use steambind_shared::{
    CallHandle, ChatEntryType, LobbyComparison, LobbyDistanceFilter, LobbyType, SendKind, SteamId,
};

/// Per-subsystem availability switches. All on by default.
#[derive(Clone, Debug)]
pub struct Availability {
    pub init_ok: bool,
    pub user: bool,
    pub friends: bool,
    pub matchmaking: bool,
    pub networking: bool,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            init_ok: true,
            user: true,
            friends: true,
            matchmaking: true,
            networking: true,
        }
    }
}

/// A lobby known to the fake matchmaking backend.
#[derive(Clone, Debug, Default)]
pub struct FakeLobby {
    pub owner: SteamId,
    pub members: Vec<SteamId>,
    pub data: HashMap<String, String>,
}

/// Stored chat entry, fetched by `chat_entry` during dispatch.
#[derive(Clone, Debug)]
pub struct ChatRecord {
    pub sender: SteamId,
    pub body: Vec<u8>,
    pub entry_type: ChatEntryType,
}

/// Recorded outbound P2P packet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentPacket {
    pub remote: SteamId,
    pub data: Vec<u8>,
    pub send_kind: SendKind,
    pub channel: i32,
}

/// Recorded outbound matchmaking call.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchmakingCall {
    CreateLobby {
        lobby_type: LobbyType,
        max_members: u32,
    },
    RequestLobbyList,
    StringFilter {
        key: String,
        value: String,
        comparison: LobbyComparison,
    },
    DistanceFilter(LobbyDistanceFilter),
    JoinLobby(SteamId),
    LeaveLobby(SteamId),
}

/// Scripted state shared between the fake backend and the test.
#[derive(Default)]
pub struct FakeWorld {
    pub local_user: SteamId,
    pub persona_name: String,
    /// Resident profile names; a missing entry means "still loading".
    pub friend_names: HashMap<SteamId, String>,

    pub lobbies: HashMap<SteamId, FakeLobby>,
    /// Enumeration order of the most recent lobby search.
    pub match_list: Vec<SteamId>,
    pub chat_entries: HashMap<(SteamId, i32), ChatRecord>,

    /// Queued inbound packets per channel, front is next.
    pub packets: HashMap<i32, VecDeque<(SteamId, Vec<u8>)>>,

    /// Filters staged since the last list request.
    pub pending_filters: Vec<MatchmakingCall>,
    /// Snapshot taken when `request_lobby_list` was issued.
    pub filters_at_last_request: Vec<MatchmakingCall>,

    pub calls: Vec<MatchmakingCall>,
    pub sent_chat: Vec<(SteamId, Vec<u8>)>,
    pub sent_packets: Vec<SentPacket>,
    pub accepted_sessions: Vec<SteamId>,
    pub closed_sessions: Vec<SteamId>,
    pub relay_allowed: Option<bool>,

    pub next_handle: u64,
    pub issued_handles: Vec<CallHandle>,
}

impl FakeWorld {
    fn issue_handle(&mut self) -> CallHandle {
        self.next_handle += 1;
        let handle = CallHandle::new(self.next_handle);
        self.issued_handles.push(handle);
        handle
    }
}

/// Test-side handle to the fake backend's shared state.
pub struct FakeHandle {
    world: Rc<RefCell<FakeWorld>>,
    availability: Rc<RefCell<Availability>>,
    notifications: Rc<RefCell<VecDeque<Notification>>>,
}

impl FakeHandle {
    pub fn world(&self) -> RefMut<'_, FakeWorld> {
        self.world.borrow_mut()
    }

    pub fn availability(&self) -> RefMut<'_, Availability> {
        self.availability.borrow_mut()
    }

    pub fn push_notification(&self, notification: Notification) {
        self.notifications.borrow_mut().push_back(notification);
    }

    /// Handle of the most recently issued call-result request.
    pub fn last_handle(&self) -> CallHandle {
        self.world
            .borrow()
            .issued_handles
            .last()
            .copied()
            .unwrap_or(CallHandle::INVALID)
    }
}

struct FakeUser {
    world: Rc<RefCell<FakeWorld>>,
}

impl UserAccess for FakeUser {
    fn steam_id(&self) -> SteamId {
        self.world.borrow().local_user
    }
}

struct FakeFriends {
    world: Rc<RefCell<FakeWorld>>,
}

impl FriendsAccess for FakeFriends {
    fn persona_name(&self) -> String {
        self.world.borrow().persona_name.clone()
    }

    fn request_user_information(&mut self, user: SteamId, _name_only: bool) -> bool {
        !self.world.borrow().friend_names.contains_key(&user)
    }

    fn friend_persona_name(&self, user: SteamId) -> String {
        self.world
            .borrow()
            .friend_names
            .get(&user)
            .cloned()
            .unwrap_or_default()
    }
}

struct FakeMatchmaking {
    world: Rc<RefCell<FakeWorld>>,
}

impl MatchmakingAccess for FakeMatchmaking {
    fn create_lobby(&mut self, lobby_type: LobbyType, max_members: u32) -> CallHandle {
        let mut world = self.world.borrow_mut();
        world.calls.push(MatchmakingCall::CreateLobby {
            lobby_type,
            max_members,
        });
        world.issue_handle()
    }

    fn request_lobby_list(&mut self) -> CallHandle {
        let mut world = self.world.borrow_mut();
        world.calls.push(MatchmakingCall::RequestLobbyList);
        let staged = std::mem::take(&mut world.pending_filters);
        world.filters_at_last_request = staged;
        world.issue_handle()
    }

    fn add_string_filter(&mut self, key: &str, value: &str, comparison: LobbyComparison) {
        let call = MatchmakingCall::StringFilter {
            key: key.to_string(),
            value: value.to_string(),
            comparison,
        };
        let mut world = self.world.borrow_mut();
        world.calls.push(call.clone());
        world.pending_filters.push(call);
    }

    fn add_distance_filter(&mut self, filter: LobbyDistanceFilter) {
        let call = MatchmakingCall::DistanceFilter(filter);
        let mut world = self.world.borrow_mut();
        world.calls.push(call.clone());
        world.pending_filters.push(call);
    }

    fn set_lobby_data(&mut self, lobby: SteamId, key: &str, value: &str) -> bool {
        let mut world = self.world.borrow_mut();
        world
            .lobbies
            .entry(lobby)
            .or_default()
            .data
            .insert(key.to_string(), value.to_string());
        true
    }

    fn join_lobby(&mut self, lobby: SteamId) {
        self.world
            .borrow_mut()
            .calls
            .push(MatchmakingCall::JoinLobby(lobby));
    }

    fn leave_lobby(&mut self, lobby: SteamId) {
        self.world
            .borrow_mut()
            .calls
            .push(MatchmakingCall::LeaveLobby(lobby));
    }

    fn lobby_by_index(&self, index: u32) -> SteamId {
        self.world
            .borrow()
            .match_list
            .get(index as usize)
            .copied()
            .unwrap_or_else(SteamId::nil)
    }

    fn lobby_owner(&self, lobby: SteamId) -> SteamId {
        self.world
            .borrow()
            .lobbies
            .get(&lobby)
            .map(|entry| entry.owner)
            .unwrap_or_else(SteamId::nil)
    }

    fn num_lobby_members(&self, lobby: SteamId) -> u32 {
        self.world
            .borrow()
            .lobbies
            .get(&lobby)
            .map(|entry| entry.members.len() as u32)
            .unwrap_or(0)
    }

    fn lobby_member_by_index(&self, lobby: SteamId, index: u32) -> SteamId {
        self.world
            .borrow()
            .lobbies
            .get(&lobby)
            .and_then(|entry| entry.members.get(index as usize))
            .copied()
            .unwrap_or_else(SteamId::nil)
    }

    fn send_chat_message(&mut self, lobby: SteamId, body: &[u8]) -> bool {
        self.world
            .borrow_mut()
            .sent_chat
            .push((lobby, body.to_vec()));
        true
    }

    fn chat_entry(&self, lobby: SteamId, chat_id: i32, buffer: &mut [u8]) -> ChatEntry {
        let world = self.world.borrow();
        match world.chat_entries.get(&(lobby, chat_id)) {
            Some(record) => {
                let copied = record.body.len().min(buffer.len());
                buffer[..copied].copy_from_slice(&record.body[..copied]);
                ChatEntry {
                    copied,
                    sender: record.sender,
                    entry_type: record.entry_type,
                }
            }
            None => ChatEntry {
                copied: 0,
                sender: SteamId::nil(),
                entry_type: ChatEntryType::Invalid,
            },
        }
    }
}

struct FakeNetworking {
    world: Rc<RefCell<FakeWorld>>,
}

impl NetworkingAccess for FakeNetworking {
    fn accept_session(&mut self, remote: SteamId) -> bool {
        self.world.borrow_mut().accepted_sessions.push(remote);
        true
    }

    fn allow_packet_relay(&mut self, allow: bool) -> bool {
        self.world.borrow_mut().relay_allowed = Some(allow);
        true
    }

    fn close_session(&mut self, remote: SteamId) -> bool {
        self.world.borrow_mut().closed_sessions.push(remote);
        true
    }

    fn available_packet_size(&self, channel: i32) -> Option<u32> {
        self.world
            .borrow()
            .packets
            .get(&channel)
            .and_then(|queue| queue.front())
            .map(|(_, data)| data.len() as u32)
    }

    fn read_packet(&mut self, buffer: &mut [u8], channel: i32) -> Option<PacketRead> {
        let mut world = self.world.borrow_mut();
        let (sender, data) = world.packets.get_mut(&channel)?.pop_front()?;
        let copied = data.len().min(buffer.len());
        buffer[..copied].copy_from_slice(&data[..copied]);
        Some(PacketRead { copied, sender })
    }

    fn send_packet(
        &mut self,
        remote: SteamId,
        data: &[u8],
        send_kind: SendKind,
        channel: i32,
    ) -> bool {
        self.world.borrow_mut().sent_packets.push(SentPacket {
            remote,
            data: data.to_vec(),
            send_kind,
            channel,
        });
        true
    }
}

/// The boxed-able backend half.
pub struct FakeSteamApi {
    availability: Rc<RefCell<Availability>>,
    notifications: Rc<RefCell<VecDeque<Notification>>>,
    user: FakeUser,
    friends: FakeFriends,
    matchmaking: FakeMatchmaking,
    networking: FakeNetworking,
}

impl FakeSteamApi {
    pub fn new() -> (FakeSteamApi, FakeHandle) {
        let world = Rc::new(RefCell::new(FakeWorld::default()));
        let availability = Rc::new(RefCell::new(Availability::default()));
        let notifications = Rc::new(RefCell::new(VecDeque::new()));
        let api = FakeSteamApi {
            availability: availability.clone(),
            notifications: notifications.clone(),
            user: FakeUser {
                world: world.clone(),
            },
            friends: FakeFriends {
                world: world.clone(),
            },
            matchmaking: FakeMatchmaking {
                world: world.clone(),
            },
            networking: FakeNetworking {
                world: world.clone(),
            },
        };
        let handle = FakeHandle {
            world,
            availability,
            notifications,
        };
        (api, handle)
    }
}

impl SteamApi for FakeSteamApi {
    fn init(&mut self) -> bool {
        self.availability.borrow().init_ok
    }

    fn run_callbacks(&mut self) -> Vec<Notification> {
        self.notifications.borrow_mut().drain(..).collect()
    }

    fn user(&self) -> Option<&dyn UserAccess> {
        if self.availability.borrow().user {
            Some(&self.user)
        } else {
            None
        }
    }

    fn friends(&self) -> Option<&dyn FriendsAccess> {
        if self.availability.borrow().friends {
            Some(&self.friends)
        } else {
            None
        }
    }

    fn friends_mut(&mut self) -> Option<&mut dyn FriendsAccess> {
        if self.availability.borrow().friends {
            Some(&mut self.friends)
        } else {
            None
        }
    }

    fn matchmaking(&self) -> Option<&dyn MatchmakingAccess> {
        if self.availability.borrow().matchmaking {
            Some(&self.matchmaking)
        } else {
            None
        }
    }

    fn matchmaking_mut(&mut self) -> Option<&mut dyn MatchmakingAccess> {
        if self.availability.borrow().matchmaking {
            Some(&mut self.matchmaking)
        } else {
            None
        }
    }

    fn networking(&self) -> Option<&dyn NetworkingAccess> {
        if self.availability.borrow().networking {
            Some(&self.networking)
        } else {
            None
        }
    }

    fn networking_mut(&mut self) -> Option<&mut dyn NetworkingAccess> {
        if self.availability.borrow().networking {
            Some(&mut self.networking)
        } else {
            None
        }
    }
}

/// A facade wired to a fresh fake backend, plus the scripting handle.
pub fn binding_fixture() -> (SteamBinding, FakeHandle) {
    let (api, handle) = FakeSteamApi::new();
    (SteamBinding::new(Box::new(api)), handle)
}
