use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named event raised by a node, dispatched to the route that rendered it.
///
/// `keys` lists the state entries the route needs to see alongside the action,
/// e.g. the field ids a submit button captures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub args: HashMap<String, String>,
    pub keys: Vec<String>,
}

impl Action {
    pub fn named(name: impl ToString, keys: Vec<String>) -> Action {
        Action::new(name, HashMap::default(), keys)
    }

    pub fn new(name: impl ToString, args: HashMap<String, String>, keys: Vec<String>) -> Action {
        Action {
            name: name.to_string(),
            args,
            keys,
        }
    }

    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }
}
