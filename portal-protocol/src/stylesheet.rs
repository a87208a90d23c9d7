//! Class-based styling shipped alongside each document.
//!
//! Nodes refer to classes by name; the client resolves them against the
//! document's stylesheet, later classes overriding earlier ones.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Alignment {
    Start,
    End,
    Centre,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Colour {
    RGBA(f32, f32, f32, f32), // Each component is in the range [0.0, 1.0]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum FontWeight {
    Normal,
    Medium,
    Bold,
    ExtraBold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    Pixels(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Size {
    Auto,
    Fixed(Length),
    Fill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleRule {
    // Text
    TextColour(Colour),
    FontSize(Length),
    FontWeight(FontWeight),

    // Background
    BackgroundColour(Colour),

    // Border
    BorderWidth(Length),
    BorderColour(Colour),
    BorderRadius(Length),

    // Container layout
    AlignChildrenX(Alignment),
    AlignChildrenY(Alignment),
    Width(Size),
    Height(Size),
    Gap(Length),
    Padding(Length),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylesheetClass {
    pub name: String,
    pub rules: Vec<StyleRule>,
}

impl StylesheetClass {
    pub fn new(name: impl ToString, rules: Vec<StyleRule>) -> Self {
        StylesheetClass {
            name: name.to_string(),
            rules,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stylesheet {
    pub classes: Vec<StylesheetClass>,
}

impl Stylesheet {
    pub fn new(classes: Vec<StylesheetClass>) -> Self {
        Stylesheet { classes }
    }

    pub fn get(&self, class: &str) -> Option<&StylesheetClass> {
        self.classes.iter().find(|c| c.name == class)
    }
}
