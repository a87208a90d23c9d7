use portal::{
    Alignment, Colour, FontWeight, Length, Size, StyleRule, Stylesheet, StylesheetClass,
};

const GREEN: Colour = Colour::RGBA(0.09, 0.64, 0.29, 1.0);
const WHITE: Colour = Colour::RGBA(1.0, 1.0, 1.0, 1.0);
const GREY: Colour = Colour::RGBA(0.42, 0.45, 0.5, 1.0);
const BORDER_GREY: Colour = Colour::RGBA(0.82, 0.84, 0.86, 1.0);

pub fn stylesheet() -> Stylesheet {
    Stylesheet::new(vec![
        StylesheetClass::new(
            "login-container",
            vec![
                StyleRule::Gap(Length::Pixels(16.)),
                StyleRule::Width(Size::Fixed(Length::Pixels(420.))),
                StyleRule::AlignChildrenY(Alignment::Centre),
            ],
        ),
        StylesheetClass::new(
            "title",
            vec![
                StyleRule::FontSize(Length::Pixels(30.)),
                StyleRule::FontWeight(FontWeight::Bold),
            ],
        ),
        StylesheetClass::new(
            "subtitle",
            vec![StyleRule::TextColour(GREY), StyleRule::AlignChildrenX(Alignment::Centre)],
        ),
        StylesheetClass::new(
            "label",
            vec![
                StyleRule::FontSize(Length::Pixels(14.)),
                StyleRule::FontWeight(FontWeight::Medium),
            ],
        ),
        StylesheetClass::new(
            "input",
            vec![
                StyleRule::BorderRadius(Length::Pixels(8.0)),
                StyleRule::BorderWidth(Length::Pixels(1.0)),
                StyleRule::BorderColour(BORDER_GREY),
                StyleRule::Padding(Length::Pixels(10.0)),
            ],
        ),
        StylesheetClass::new(
            "primary-action",
            vec![
                StyleRule::BorderRadius(Length::Pixels(8.0)),
                StyleRule::TextColour(WHITE),
                StyleRule::BackgroundColour(GREEN),
                StyleRule::Width(Size::Fill),
            ],
        ),
        StylesheetClass::new(
            "secondary-action",
            vec![
                StyleRule::TextColour(GREY),
                StyleRule::BackgroundColour(Colour::RGBA(0.0, 0.0, 0.0, 0.0)),
            ],
        ),
        StylesheetClass::new("footer", vec![StyleRule::TextColour(GREY)]),
        StylesheetClass::new(
            "nav-bar",
            vec![
                StyleRule::Height(Size::Fixed(Length::Pixels(64.))),
                StyleRule::Gap(Length::Pixels(8.)),
                StyleRule::BackgroundColour(WHITE),
            ],
        ),
        StylesheetClass::new("nav-item", vec![StyleRule::TextColour(GREY)]),
        StylesheetClass::new(
            "nav-item-active",
            vec![StyleRule::TextColour(GREEN), StyleRule::FontWeight(FontWeight::Medium)],
        ),
        StylesheetClass::new("dashboard", vec![StyleRule::Gap(Length::Pixels(24.))]),
    ])
}
