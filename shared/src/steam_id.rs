use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const ACCOUNT_ID_BITS: u64 = 32;
const INSTANCE_BITS: u64 = 20;

const INSTANCE_SHIFT: u64 = ACCOUNT_ID_BITS;
const ACCOUNT_TYPE_SHIFT: u64 = ACCOUNT_ID_BITS + INSTANCE_BITS;
const UNIVERSE_SHIFT: u64 = ACCOUNT_TYPE_SHIFT + 4;

const ACCOUNT_ID_MASK: u64 = (1 << ACCOUNT_ID_BITS) - 1;
const INSTANCE_MASK: u64 = (1 << INSTANCE_BITS) - 1;
const ACCOUNT_TYPE_MASK: u64 = 0xF;
const UNIVERSE_MASK: u64 = 0xFF;

/// Instance id of a regular desktop user session.
pub const DESKTOP_INSTANCE: u32 = 1;

/// Which identity backend universe an id belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Universe {
    Invalid = 0,
    Public = 1,
    Beta = 2,
    Internal = 3,
    Dev = 4,
}

impl Universe {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Universe::Public,
            2 => Universe::Beta,
            3 => Universe::Internal,
            4 => Universe::Dev,
            _ => Universe::Invalid,
        }
    }
}

/// Account classification encoded into the high bits of an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountType {
    Invalid = 0,
    Individual = 1,
    Multiseat = 2,
    GameServer = 3,
    AnonGameServer = 4,
    Pending = 5,
    ContentServer = 6,
    Clan = 7,
    Chat = 8,
    ConsoleUser = 9,
    AnonUser = 10,
}

impl AccountType {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Out-of-range codes coerce to `Individual` rather than being
    /// rejected; id construction from script input never fails.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => AccountType::Invalid,
            1 => AccountType::Individual,
            2 => AccountType::Multiseat,
            3 => AccountType::GameServer,
            4 => AccountType::AnonGameServer,
            5 => AccountType::Pending,
            6 => AccountType::ContentServer,
            7 => AccountType::Clan,
            8 => AccountType::Chat,
            9 => AccountType::ConsoleUser,
            10 => AccountType::AnonUser,
            _ => AccountType::Individual,
        }
    }
}

/// 64-bit opaque handle for a user or lobby.
///
/// Layout, low to high: 32-bit account number, 20-bit instance, 4-bit
/// account type, 8-bit universe. Callers treat the raw value as opaque;
/// arithmetic on it is invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SteamId(u64);

impl SteamId {
    /// The all-zero sentinel returned wherever a subsystem is unavailable.
    pub fn nil() -> Self {
        SteamId(0)
    }

    pub fn is_nil(self) -> bool {
        self.0 == 0
    }

    pub fn from_raw(raw: u64) -> Self {
        SteamId(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }

    /// Packs the structured form into the 64-bit handle.
    pub fn new(account_id: u32, instance: u32, kind: AccountType, universe: Universe) -> Self {
        let mut raw = u64::from(account_id);
        raw |= (u64::from(instance) & INSTANCE_MASK) << INSTANCE_SHIFT;
        raw |= u64::from(kind.code()) << ACCOUNT_TYPE_SHIFT;
        raw |= u64::from(universe.code()) << UNIVERSE_SHIFT;
        SteamId(raw)
    }

    /// Shortcut for building a remote-user id: public universe, desktop
    /// instance, account type coerced into range.
    pub fn from_account(account_id: u32, type_code: i32) -> Self {
        Self::new(
            account_id,
            DESKTOP_INSTANCE,
            AccountType::from_code(type_code),
            Universe::Public,
        )
    }

    pub fn account_id(self) -> u32 {
        (self.0 & ACCOUNT_ID_MASK) as u32
    }

    pub fn instance(self) -> u32 {
        ((self.0 >> INSTANCE_SHIFT) & INSTANCE_MASK) as u32
    }

    pub fn account_type(self) -> AccountType {
        AccountType::from_code(((self.0 >> ACCOUNT_TYPE_SHIFT) & ACCOUNT_TYPE_MASK) as i32)
    }

    pub fn universe(self) -> Universe {
        Universe::from_code(((self.0 >> UNIVERSE_SHIFT) & UNIVERSE_MASK) as u8)
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from parsing a textual id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    /// Input was not a base-10 unsigned 64-bit integer
    #[error("steam id {text:?} is not a base-10 unsigned 64-bit integer")]
    NotAnInteger { text: String },
}

impl FromStr for SteamId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(SteamId::from_raw)
            .map_err(|_| IdParseError::NotAnInteger {
                text: s.to_string(),
            })
    }
}
