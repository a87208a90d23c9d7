use serde::{Deserialize, Serialize};

use crate::{action::Action, stylesheet::Direction};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerProps {
    pub direction: Direction,
    pub children: Vec<Node>,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: String,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonProps {
    pub label: String,
    pub on_click: Action,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckboxProps {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub classes: Vec<String>,
}

/// A controlled text field. `value` is what the field currently shows;
/// `password` masks it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub password: bool,
    pub placeholder: Option<String>,
    pub label_classes: Vec<String>,
    pub input_classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl ToString) -> SelectOption {
        SelectOption {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A closed choice between `options`. The client only ever stores one of the
/// option values under `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectProps {
    pub id: String,
    pub label: String,
    pub options: Vec<SelectOption>,
    pub selected: String,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Node {
    #[default]
    Empty,
    Container(ContainerProps),
    Text(TextProps),
    Button(ButtonProps),
    Checkbox(CheckboxProps),
    Input(InputProps),
    Select(SelectProps),
}

impl Node {
    /// The form id of this node, for the node kinds that carry one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Checkbox(CheckboxProps { id, .. })
            | Node::Input(InputProps { id, .. })
            | Node::Select(SelectProps { id, .. }) => Some(id),
            _ => None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == Some(id) {
            return Some(self);
        }

        match self {
            Node::Container(ContainerProps { children, .. }) => {
                children.iter().find_map(|child| child.find(id))
            }
            _ => None,
        }
    }

    /// All nodes in the tree, depth first, including this one.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut nodes = vec![self];
        if let Node::Container(ContainerProps { children, .. }) = self {
            for child in children {
                nodes.extend(child.descendants());
            }
        }
        nodes
    }
}
