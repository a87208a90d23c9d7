use serde::{Deserialize, Serialize};

use crate::{
    action::Action,
    document::Document,
    storage::{StateMap, StateValue, StorageScope},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ClientToServerMessage {
    Load {
        path: String,
        storage: StateMap,
    },
    Action {
        path: String,
        action: Action,
        storage: StateMap,
    },
}

impl ClientToServerMessage {
    /// One-line description for logs. Leaves out `storage`, which carries
    /// whatever the user typed.
    pub fn summary(&self) -> String {
        match self {
            ClientToServerMessage::Load { path, .. } => format!("Load {path}"),
            ClientToServerMessage::Action { path, action, .. } => {
                format!("Action {} on {path}", action.name)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    BadRequest,
    NotFound,
    InternalServerError,
}

impl ErrorCode {
    /// The equivalent HTTP status code.
    pub fn as_u16(self) -> u16 {
        match self {
            ErrorCode::BadRequest => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::InternalServerError => 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ServerToClientMessage {
    Render {
        document: Document,
    },
    RedirectTo {
        path: String,
    },
    Store {
        scope: StorageScope,
        key: String,
        value: StateValue,
    },
    Error {
        code: ErrorCode,
        message: String,
    },
}

impl ServerToClientMessage {
    /// One-line description for logs. Rendered documents echo field values
    /// back to the client, so neither they nor stored values are included.
    pub fn summary(&self) -> String {
        match self {
            ServerToClientMessage::Render { .. } => "Render".to_string(),
            ServerToClientMessage::RedirectTo { path } => format!("RedirectTo {path}"),
            ServerToClientMessage::Store { scope, key, .. } => format!("Store {key} ({scope:?})"),
            ServerToClientMessage::Error { code, .. } => format!("Error {}", code.as_u16()),
        }
    }
}
