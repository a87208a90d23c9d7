mod dashboard;
mod index;
mod login;

pub use dashboard::{DashboardRoute, SectionRoute};
pub use index::IndexRoute;
pub use login::{login_view, LoginRoute, SUBMIT_ACTION, TOGGLE_PASSWORD_ACTION};
