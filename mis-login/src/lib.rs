pub mod config;
pub mod form;
pub mod role;
pub mod routes;
mod stylesheet;

use portal::{Application, BoxedRoute};

use role::RoleId;
use routes::{DashboardRoute, IndexRoute, LoginRoute, SectionRoute};

#[derive(Copy, Clone)]
pub struct MisApplication;

impl Application for MisApplication {
    fn routes(&self) -> Vec<BoxedRoute> {
        let mut routes: Vec<BoxedRoute> = vec![Box::new(IndexRoute), Box::new(LoginRoute)];

        for role in RoleId::ALL {
            routes.push(Box::new(DashboardRoute::new(role)));
            routes.push(Box::new(SectionRoute::new(role)));
        }

        routes
    }
}
