/// Fixed receive buffer used when fetching a lobby chat entry during
/// callback dispatch. Entries longer than this truncate silently.
pub const CHAT_ENTRY_BUFFER_BYTES: usize = 8160;

/// Member cap applied when a lobby is created without an explicit size.
pub const DEFAULT_LOBBY_MEMBERS: u32 = 2;
