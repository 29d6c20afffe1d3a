/// Subset of the SDK result codes the lobby surface actually reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SteamResult {
    Ok = 1,
    Fail = 2,
    NoConnection = 3,
    AccessDenied = 15,
    Timeout = 16,
    LimitExceeded = 25,
}

impl SteamResult {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Self {
        match code {
            1 => SteamResult::Ok,
            3 => SteamResult::NoConnection,
            15 => SteamResult::AccessDenied,
            16 => SteamResult::Timeout,
            25 => SteamResult::LimitExceeded,
            _ => SteamResult::Fail,
        }
    }
}
