use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How long the client keeps a stored value. Clients decode all three, so
/// the set is fixed even though the login portal only writes `Local`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageScope {
    /// Kept on disk by the client.
    Persistent,
    /// Dropped when the client exits.
    Session,
    /// Dropped on the next `RedirectTo`.
    Local,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateValue {
    Empty,
    String(String),
    Boolean(bool),
}

impl StateValue {
    pub fn boolean(&self) -> bool {
        match self {
            StateValue::Boolean(b) => *b,
            _ => false,
        }
    }

    pub fn string(&self) -> &str {
        match self {
            StateValue::String(s) => s,
            _ => "",
        }
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Boolean(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::String(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::String(value)
    }
}

/// Client-held state sent with every request, keyed by form id.
pub type StateMap = HashMap<String, StateValue>;
