//! Enum codes for the lobby/matchmaking surface. Discriminants match the
//! SDK wire values exactly; `from_code` never rejects, it coerces.

/// Visibility class of a lobby.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LobbyType {
    Private = 0,
    FriendsOnly = 1,
    Public = 2,
    Invisible = 3,
}

impl LobbyType {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            0 => LobbyType::Private,
            1 => LobbyType::FriendsOnly,
            3 => LobbyType::Invisible,
            _ => LobbyType::Public,
        }
    }
}

/// Comparison operator for a lobby-list string filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LobbyComparison {
    EqualToOrLessThan = -2,
    LessThan = -1,
    Equal = 0,
    GreaterThan = 1,
    EqualToOrGreaterThan = 2,
    NotEqual = 3,
}

impl LobbyComparison {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            -2 => LobbyComparison::EqualToOrLessThan,
            -1 => LobbyComparison::LessThan,
            1 => LobbyComparison::GreaterThan,
            2 => LobbyComparison::EqualToOrGreaterThan,
            3 => LobbyComparison::NotEqual,
            _ => LobbyComparison::Equal,
        }
    }
}

/// Geographic scope of a lobby search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LobbyDistanceFilter {
    Close = 0,
    Default = 1,
    Far = 2,
    Worldwide = 3,
}

impl LobbyDistanceFilter {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            0 => LobbyDistanceFilter::Close,
            2 => LobbyDistanceFilter::Far,
            3 => LobbyDistanceFilter::Worldwide,
            _ => LobbyDistanceFilter::Default,
        }
    }
}

/// Classification of a lobby chat entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatEntryType {
    Invalid = 0,
    ChatMsg = 1,
    Typing = 2,
    InviteGame = 3,
    Emote = 4,
    LeftConversation = 6,
    Entered = 7,
    WasKicked = 8,
    WasBanned = 9,
    Disconnected = 10,
}

impl ChatEntryType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            1 => ChatEntryType::ChatMsg,
            2 => ChatEntryType::Typing,
            3 => ChatEntryType::InviteGame,
            4 => ChatEntryType::Emote,
            6 => ChatEntryType::LeftConversation,
            7 => ChatEntryType::Entered,
            8 => ChatEntryType::WasKicked,
            9 => ChatEntryType::WasBanned,
            10 => ChatEntryType::Disconnected,
            _ => ChatEntryType::Invalid,
        }
    }
}

/// Response code delivered with a lobby-enter completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatRoomEnterResponse {
    Success = 1,
    DoesntExist = 2,
    NotAllowed = 3,
    Full = 4,
    Error = 5,
    Banned = 6,
    Limited = 7,
    ClanDisabled = 8,
    CommunityBan = 9,
    MemberBlockedYou = 10,
    YouBlockedMember = 11,
}

impl ChatRoomEnterResponse {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Self {
        match code {
            1 => ChatRoomEnterResponse::Success,
            2 => ChatRoomEnterResponse::DoesntExist,
            3 => ChatRoomEnterResponse::NotAllowed,
            4 => ChatRoomEnterResponse::Full,
            6 => ChatRoomEnterResponse::Banned,
            7 => ChatRoomEnterResponse::Limited,
            8 => ChatRoomEnterResponse::ClanDisabled,
            9 => ChatRoomEnterResponse::CommunityBan,
            10 => ChatRoomEnterResponse::MemberBlockedYou,
            11 => ChatRoomEnterResponse::YouBlockedMember,
            _ => ChatRoomEnterResponse::Error,
        }
    }
}

/// Bit masks carried by the `lobby_chat_update` member-state field.
pub mod chat_member_state_change {
    pub const ENTERED: u32 = 0x0001;
    pub const LEFT: u32 = 0x0002;
    pub const DISCONNECTED: u32 = 0x0004;
    pub const KICKED: u32 = 0x0008;
    pub const BANNED: u32 = 0x0010;
}
