use crate::{router::RoutePattern, Params, Route};

pub type BoxedRoute = Box<dyn Route>;

pub trait Application: Copy + Send + Sync + Sized + 'static {
    fn routes(&self) -> Vec<BoxedRoute>;

    /// First route whose pattern matches `path`, with the extracted params.
    fn route(&self, path: &str) -> Option<(BoxedRoute, Params)> {
        self.routes().into_iter().find_map(|route| {
            RoutePattern::new(route.path())
                .matches(path)
                .map(|params| (route, params))
        })
    }
}
