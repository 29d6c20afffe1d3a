use steambind_shared::{CHAT_ENTRY_BUFFER_BYTES, DEFAULT_LOBBY_MEMBERS};

/// Tunables for a [`SteamBinding`](crate::SteamBinding).
#[derive(Clone, Debug)]
pub struct BindingConfig {
    /// Receive buffer used when fetching a lobby chat entry during
    /// dispatch. Entries longer than this truncate silently.
    pub chat_entry_buffer_bytes: usize,
    /// Member cap used by
    /// [`create_lobby_with_default_size`](crate::SteamBinding::create_lobby_with_default_size).
    pub default_lobby_members: u32,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            chat_entry_buffer_bytes: CHAT_ENTRY_BUFFER_BYTES,
            default_lobby_members: DEFAULT_LOBBY_MEMBERS,
        }
    }
}
