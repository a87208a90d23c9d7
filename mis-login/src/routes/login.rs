use portal::{
    Action, ButtonProps, CheckboxProps, ContainerProps, Context, Direction, Document, InputProps,
    Node, Params, Render, Result, Route, SelectOption, SelectProps, StateMap, StorageScope,
    TextProps,
};

use kv_log_macro as log;

use crate::{
    form::{
        FormState, LoginMessage, EMAIL_FIELD, PASSWORD_FIELD, PASSWORD_VISIBLE_KEY,
        REMEMBER_ME_FIELD, ROLE_FIELD,
    },
    role::role_options,
    stylesheet::stylesheet,
};

pub struct LoginRoute;

pub(crate) const LOGIN_PATH: &str = "/login";

pub const SUBMIT_ACTION: &str = "submit";
pub const TOGGLE_PASSWORD_ACTION: &str = "toggle_password_visibility";

#[async_trait::async_trait]
impl Route for LoginRoute {
    fn path(&self) -> &'static str {
        LOGIN_PATH
    }

    async fn action<'a>(
        &self,
        action: &Action,
        _params: &Params,
        context: &mut Context<'a>,
    ) -> Result<()> {
        let mut form = FormState::from_storage(&context.storage);

        match action {
            Action { name, .. } if name == SUBMIT_ACTION => {
                if let Some(target) = form.update(LoginMessage::Submit) {
                    log::info!("Signing in", {
                        role: form.selected_role.as_str(),
                        target: target.path()
                    });
                    context.redirect(target).await?;
                }
            }

            Action { name, .. } if name == TOGGLE_PASSWORD_ACTION => {
                form.update(LoginMessage::TogglePasswordVisibility);
                context
                    .store(
                        StorageScope::Local,
                        PASSWORD_VISIBLE_KEY,
                        form.password_visible,
                    )
                    .await?;
            }

            _ => log::error!("Unknown action: {:?}", action),
        }

        Ok(())
    }

    async fn render(&self, _params: &Params, storage: &StateMap) -> Render {
        Render::Document(login_view(&FormState::from_storage(storage)))
    }
}

fn text(text: &str, class: &str) -> Node {
    Node::Text(TextProps {
        text: text.to_string(),
        classes: vec![class.to_string()],
    })
}

pub fn login_view(form: &FormState) -> Document {
    let toggle_label = if form.password_visible {
        "Hide password"
    } else {
        "Show password"
    };

    Document {
        node: Node::Container(ContainerProps {
            direction: Direction::Vertical,
            classes: vec!["login-container".to_string()],
            children: vec![
                text("NAITA MIS", "title"),
                text("Digital Monitoring System", "subtitle"),
                Node::Input(InputProps {
                    id: EMAIL_FIELD.to_string(),
                    label: "Email Address".to_string(),
                    value: form.email.clone(),
                    password: false,
                    placeholder: Some("Enter your email".to_string()),
                    label_classes: vec!["label".to_string()],
                    input_classes: vec!["input".to_string()],
                }),
                Node::Container(ContainerProps {
                    direction: Direction::Horizontal,
                    classes: vec![],
                    children: vec![
                        Node::Input(InputProps {
                            id: PASSWORD_FIELD.to_string(),
                            label: "Password".to_string(),
                            value: form.password.clone(),
                            password: !form.password_visible,
                            placeholder: Some("Enter your password".to_string()),
                            label_classes: vec!["label".to_string()],
                            input_classes: vec!["input".to_string()],
                        }),
                        Node::Button(ButtonProps {
                            label: toggle_label.to_string(),
                            on_click: Action::named(TOGGLE_PASSWORD_ACTION, vec![]),
                            classes: vec!["secondary-action".to_string()],
                        }),
                    ],
                }),
                Node::Select(SelectProps {
                    id: ROLE_FIELD.to_string(),
                    label: "Role".to_string(),
                    options: role_options()
                        .into_iter()
                        .map(|(role, label)| SelectOption::new(role, label))
                        .collect(),
                    selected: form.selected_role.to_string(),
                    classes: vec!["input".to_string()],
                }),
                Node::Checkbox(CheckboxProps {
                    id: REMEMBER_ME_FIELD.to_string(),
                    label: "Remember me".to_string(),
                    checked: form.remember_me,
                    classes: vec![],
                }),
                Node::Button(ButtonProps {
                    label: "Sign In".to_string(),
                    on_click: Action::named(
                        SUBMIT_ACTION,
                        vec![
                            EMAIL_FIELD.to_string(),
                            PASSWORD_FIELD.to_string(),
                            ROLE_FIELD.to_string(),
                        ],
                    ),
                    classes: vec!["primary-action".to_string()],
                }),
                text("Enter your credentials to access your dashboard", "footer"),
            ],
        }),
        stylesheet: stylesheet(),
    }
}
