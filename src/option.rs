//! State of the settings widgets on the highlight page.
//!
//! Each setting (profile, language...) is shown as a current-option button
//! with an arrow next to it. Clicking the arrow expands or collapses the list
//! of all options; clicking an option copies its icon into the current
//! button and its value into the hidden form field that is submitted with
//! the request.

use crate::settings::Settings;
use serde::Serialize;
use std::collections::BTreeMap;

const ARROW_LEFT_IMAGE: &str = "/pic/arrow-left.png";
const ARROW_RIGHT_IMAGE: &str = "/pic/arrow-right.png";

/// Which way the option arrow points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    /// Collapsed, the initial state
    #[default]
    Right,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// How the option list and arrow look for a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArrowView {
    /// CSS `display` of the list of all options
    pub display: &'static str,
    /// Arrow image path
    pub image: &'static str,
}

impl From<Direction> for ArrowView {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self {
                display: "block",
                image: ARROW_LEFT_IMAGE,
            },
            Direction::Right => Self {
                display: "none",
                image: ARROW_RIGHT_IMAGE,
            },
        }
    }
}

/// The arrow that expands and collapses an option list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionArrow {
    direction: Direction,
}

impl OptionArrow {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn view(&self) -> ArrowView {
        self.direction.into()
    }

    /// Flip the arrow and return how the widget should now look.
    pub fn click(&mut self) -> ArrowView {
        self.direction = self.direction.toggled();
        self.view()
    }
}

/// The selected option of one setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionSelector {
    /// Icon shown on the current-option button
    pub current_icon: String,
    /// Alt text of the current-option button
    pub current_alt: String,
    /// Value of the hidden form field
    pub hidden_value: String,
}

impl OptionSelector {
    pub fn new(icon: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            current_icon: icon.into(),
            current_alt: value.clone(),
            hidden_value: value,
        }
    }

    /// Mirror a clicked option (its icon and alt text) into the selector.
    pub fn select(&mut self, icon: &str, alt: &str) {
        self.current_icon = icon.to_string();
        self.current_alt = alt.to_string();
        self.hidden_value = alt.to_string();
    }
}

/// Initial widget state for one setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionWidget {
    pub selector: OptionSelector,
    pub arrow: ArrowView,
}

/// Icon path for a setting value, e.g. `/pic/profile/idea.png`.
pub fn icon_path(param: &str, value: &str) -> String {
    format!("/pic/{}/{}.png", param, value)
}

/// Collapsed widgets showing the current value of every setting.
pub fn widgets_for(settings: &Settings) -> BTreeMap<&'static str, OptionWidget> {
    settings
        .renderer_settings()
        .current
        .into_iter()
        .map(|(param, value)| {
            let widget = OptionWidget {
                selector: OptionSelector::new(icon_path(param, value), value),
                arrow: OptionArrow::default().view(),
            };
            (param, widget)
        })
        .collect()
}
