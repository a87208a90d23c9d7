//! Login form state and the transitions user events drive through it.

use portal::StateMap;

use crate::role::{RoleId, RouteTarget};

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";
pub const ROLE_FIELD: &str = "role";
pub const REMEMBER_ME_FIELD: &str = "remember-me";
pub const PASSWORD_VISIBLE_KEY: &str = "password_visible";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    pub selected_role: RoleId,
    pub remember_me: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    RoleChanged(RoleId),
    RememberMeChanged(bool),
    TogglePasswordVisibility,
    Submit,
}

impl FormState {
    /// Rebuilds the form from the state the client holds for this page.
    pub fn from_storage(storage: &StateMap) -> FormState {
        let string = |key: &str| {
            storage
                .get(key)
                .map(|v| v.string().to_string())
                .unwrap_or_default()
        };
        let boolean = |key: &str| storage.get(key).is_some_and(|v| v.boolean());

        FormState {
            email: string(EMAIL_FIELD),
            password: string(PASSWORD_FIELD),
            password_visible: boolean(PASSWORD_VISIBLE_KEY),
            selected_role: RoleId::from_state(storage.get(ROLE_FIELD)),
            remember_me: boolean(REMEMBER_ME_FIELD),
        }
    }

    /// Applies one event. Only `Submit` asks for navigation.
    ///
    /// The client writes typed values and the role choice into its own state
    /// map, so the field-change messages mirror edits it has already made.
    /// Routes only build state through `from_storage`.
    pub fn update(&mut self, message: LoginMessage) -> Option<RouteTarget> {
        match message {
            LoginMessage::EmailChanged(email) => self.email = email,
            LoginMessage::PasswordChanged(password) => self.password = password,
            LoginMessage::RoleChanged(role) => self.selected_role = role,
            LoginMessage::RememberMeChanged(remember_me) => self.remember_me = remember_me,
            LoginMessage::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible
            }
            LoginMessage::Submit => return Some(self.submit()),
        }

        None
    }

    /// Credentials are not checked; the selected role alone picks the target.
    pub fn submit(&self) -> RouteTarget {
        self.selected_role.route_target()
    }
}
