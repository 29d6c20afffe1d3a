//! Marshaling of raw SDK notifications into outward signals.

use log::warn;

use steambind_shared::{CallHandle, CallKind, Signal, SignalSink, SteamId};

use crate::api::{CallResultPayload, Notification};
use crate::binding::SteamBinding;
use crate::error::DispatchError;

impl SteamBinding {
    pub(crate) fn dispatch(
        &mut self,
        notification: Notification,
        sink: &mut dyn SignalSink,
    ) -> Result<(), DispatchError> {
        match notification {
            Notification::LobbyEnter {
                lobby,
                permissions,
                locked,
                response,
            } => {
                sink.emit(Signal::LobbyJoined {
                    lobby,
                    permissions,
                    locked,
                    response,
                });
            }
            Notification::LobbyDataUpdate {
                lobby,
                member,
                success,
            } => {
                sink.emit(Signal::LobbyDataUpdate {
                    success,
                    lobby,
                    member,
                });
            }
            Notification::LobbyChatUpdate {
                lobby,
                changed,
                making_change,
                chat_state,
            } => {
                sink.emit(Signal::LobbyChatUpdate {
                    lobby,
                    changed,
                    making_change,
                    chat_state,
                });
            }
            Notification::LobbyChatMessage {
                lobby,
                user,
                chat_id,
                chat_type,
            } => {
                self.dispatch_chat_message(lobby, user, chat_id, chat_type, sink)?;
            }
            Notification::LobbyInvite {
                inviter,
                lobby,
                game,
            } => {
                sink.emit(Signal::LobbyInvite {
                    inviter,
                    lobby,
                    game,
                });
            }
            Notification::LobbyJoinRequested { lobby, friend } => {
                sink.emit(Signal::LobbyJoinRequested { lobby, friend });
            }
            Notification::P2pSessionRequest { remote } => {
                sink.emit(Signal::P2pSessionRequest { remote });
            }
            Notification::P2pSessionConnectFail {
                remote,
                session_error,
            } => {
                sink.emit(Signal::P2pSessionConnectFail {
                    remote,
                    session_error,
                });
            }
            Notification::CallResult {
                handle,
                io_failure,
                payload,
            } => {
                self.dispatch_call_result(handle, io_failure, payload, sink)?;
            }
        }
        Ok(())
    }

    fn dispatch_call_result(
        &mut self,
        handle: CallHandle,
        io_failure: bool,
        payload: CallResultPayload,
        sink: &mut dyn SignalSink,
    ) -> Result<(), DispatchError> {
        let Some(kind) = self.pending.resolve(handle) else {
            return Err(DispatchError::UntrackedCallHandle {
                handle: handle.raw(),
            });
        };
        if io_failure {
            // A log line alone would leave callers blind to the failure.
            warn!("{kind:?} call result reported an I/O failure; no completion payload");
            sink.emit(Signal::CallResultFailed { call: kind });
            return Ok(());
        }
        match (kind, payload) {
            (CallKind::CreateLobby, CallResultPayload::LobbyCreated { result, lobby }) => {
                sink.emit(Signal::LobbyCreated { result, lobby });
                Ok(())
            }
            (CallKind::LobbyList, CallResultPayload::LobbyMatchList { lobby_count }) => {
                let Some(matchmaking) = self.api.matchmaking() else {
                    return Err(DispatchError::SubsystemUnavailable {
                        callback: "lobby_match_list",
                    });
                };
                let lobbies = (0..lobby_count)
                    .map(|index| matchmaking.lobby_by_index(index))
                    .collect();
                sink.emit(Signal::LobbyMatchList { lobbies });
                Ok(())
            }
            (kind, _) => Err(DispatchError::MismatchedCallResult { kind }),
        }
    }

    fn dispatch_chat_message(
        &mut self,
        lobby: SteamId,
        user: SteamId,
        chat_id: i32,
        chat_type: u8,
        sink: &mut dyn SignalSink,
    ) -> Result<(), DispatchError> {
        let Some(matchmaking) = self.api.matchmaking() else {
            return Err(DispatchError::SubsystemUnavailable {
                callback: "lobby_chat_message",
            });
        };
        let mut buffer = vec![0u8; self.config.chat_entry_buffer_bytes];
        let entry = matchmaking.chat_entry(lobby, chat_id, &mut buffer);
        let copied = entry.copied.min(buffer.len());
        // The entry is NUL-terminated on the wire; drop the terminator.
        let mut body = &buffer[..copied];
        if let Some(stripped) = body.strip_suffix(&[0]) {
            body = stripped;
        }
        let message = String::from_utf8_lossy(body).into_owned();
        let sender = if entry.sender.is_nil() {
            user
        } else {
            entry.sender
        };
        sink.emit(Signal::LobbyChatMessage {
            lobby,
            user: sender,
            message,
            chat_type,
        });
        Ok(())
    }
}
