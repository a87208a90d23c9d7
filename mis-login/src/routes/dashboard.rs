use maplit::hashmap;

use portal::{
    Action, ButtonProps, ContainerProps, Context, Direction, Document, Node, Params, Render,
    Result, Route, StateMap, TextProps,
};

use kv_log_macro as log;

use crate::{
    role::{NavItem, RoleId},
    stylesheet::stylesheet,
};

const NAVIGATE_ACTION: &str = "navigate";
const LOGOUT_ACTION: &str = "logout";
const PATH_ARG: &str = "path";
const SECTION_PARAM: &str = "section";

/// Landing page for a role, at the role's route target.
pub struct DashboardRoute {
    role: RoleId,
}

/// One of the pages listed in a role's navigation, e.g. `/admin/centers`.
pub struct SectionRoute {
    role: RoleId,
}

impl DashboardRoute {
    pub fn new(role: RoleId) -> Self {
        DashboardRoute { role }
    }
}

impl SectionRoute {
    pub fn new(role: RoleId) -> Self {
        SectionRoute { role }
    }
}

/// Shared by both dashboard routes: the navbar raises the same actions.
async fn dashboard_action(role: RoleId, action: &Action, context: &mut Context<'_>) -> Result<()> {
    match action.name.as_str() {
        NAVIGATE_ACTION => match action.arg(PATH_ARG) {
            Some(path) if role.nav_items().iter().any(|item| item.path == path) => {
                context.redirect(path).await?;
            }
            path => log::warn!("Ignoring navigation outside role", {
                role: role.as_str(),
                path: path.unwrap_or_default()
            }),
        },

        LOGOUT_ACTION => {
            log::info!("Signing out", { role: role.as_str() });
            context.redirect("/").await?;
        }

        _ => log::error!("Unknown action: {:?}", action),
    }

    Ok(())
}

#[async_trait::async_trait]
impl Route for DashboardRoute {
    fn path(&self) -> &'static str {
        self.role.route_target().path()
    }

    async fn action<'a>(
        &self,
        action: &Action,
        _params: &Params,
        context: &mut Context<'a>,
    ) -> Result<()> {
        dashboard_action(self.role, action, context).await
    }

    async fn render(&self, _params: &Params, _storage: &StateMap) -> Render {
        let overview = self.role.nav_items()[0];
        Render::Document(dashboard_view(self.role, overview))
    }
}

#[async_trait::async_trait]
impl Route for SectionRoute {
    fn path(&self) -> &'static str {
        self.role.section_pattern()
    }

    async fn action<'a>(
        &self,
        action: &Action,
        _params: &Params,
        context: &mut Context<'a>,
    ) -> Result<()> {
        dashboard_action(self.role, action, context).await
    }

    async fn render(&self, params: &Params, _storage: &StateMap) -> Render {
        let base = self.role.route_target();
        let section = params.get(SECTION_PARAM).map(String::as_str).unwrap_or("");
        let path = format!("{}/{}", base, section);

        match self.role.nav_items().iter().find(|item| item.path == path) {
            Some(item) => Render::Document(dashboard_view(self.role, *item)),
            None => Render::RedirectTo(base.to_string()),
        }
    }
}

fn nav_bar(role: RoleId, current: NavItem) -> Node {
    let mut children: Vec<Node> = role
        .nav_items()
        .iter()
        .map(|item| {
            let class = if item.path == current.path {
                "nav-item-active"
            } else {
                "nav-item"
            };
            Node::Button(ButtonProps {
                label: item.label.to_string(),
                on_click: Action::new(
                    NAVIGATE_ACTION,
                    hashmap! { PATH_ARG.to_string() => item.path.to_string() },
                    vec![],
                ),
                classes: vec![class.to_string()],
            })
        })
        .collect();

    children.push(Node::Button(ButtonProps {
        label: "Log out".to_string(),
        on_click: Action::named(LOGOUT_ACTION, vec![]),
        classes: vec!["secondary-action".to_string()],
    }));

    Node::Container(ContainerProps {
        direction: Direction::Horizontal,
        children,
        classes: vec!["nav-bar".to_string()],
    })
}

fn dashboard_view(role: RoleId, current: NavItem) -> Document {
    Document {
        node: Node::Container(ContainerProps {
            direction: Direction::Vertical,
            children: vec![
                nav_bar(role, current),
                Node::Text(TextProps {
                    text: current.label.to_string(),
                    classes: vec!["title".to_string()],
                }),
                Node::Text(TextProps {
                    text: format!("Signed in as {}", role.label()),
                    classes: vec!["subtitle".to_string()],
                }),
            ],
            classes: vec!["dashboard".to_string()],
        }),
        stylesheet: stylesheet(),
    }
}
