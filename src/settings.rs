//! Highlighting settings: which colour profile, source language and markup
//! flavour to use.
//!
//! Settings arrive as string parameters (`profile=eclipse`). Values are
//! matched case-insensitively against the lowercase, hyphenated variant
//! names; unknown keys and values are ignored so that a stale bookmark
//! never breaks the page.

use crate::params::Request;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// IDE colour scheme.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    #[default]
    Idea,
    Eclipse,
    Netbeans,
}

/// Language of the source being highlighted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    Java,
    Xml,
}

/// How styles are attached to highlighted tokens.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum MarkupType {
    /// `style="..."` on every span
    #[default]
    Inline,
    /// `class="..."` on every span plus a separate stylesheet
    ClassBased,
}

/// A closed set of values selectable through one request parameter.
pub trait Choice: Copy + Sized + 'static {
    /// Request parameter name.
    const PARAM: &'static str;

    fn all() -> &'static [Self];

    /// Lowercase, hyphenated name.
    fn name(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim().to_lowercase().replace('_', "-");
        Self::all().iter().copied().find(|c| c.name() == wanted)
    }
}

impl Choice for Profile {
    const PARAM: &'static str = "profile";

    fn all() -> &'static [Self] {
        &[Self::Idea, Self::Eclipse, Self::Netbeans]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Eclipse => "eclipse",
            Self::Netbeans => "netbeans",
        }
    }
}

impl Choice for Language {
    const PARAM: &'static str = "language";

    fn all() -> &'static [Self] {
        &[Self::Java, Self::Xml]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Xml => "xml",
        }
    }
}

impl Choice for MarkupType {
    const PARAM: &'static str = "markup";

    fn all() -> &'static [Self] {
        &[Self::Inline, Self::ClassBased]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::ClassBased => "class-based",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MarkupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for one highlighting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub profile: Profile,
    pub language: Language,
    pub markup: MarkupType,
}

/// Current and available settings, as handed to the page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RendererSettings {
    /// Parameter name to the selected value.
    pub current: BTreeMap<&'static str, &'static str>,
    /// Parameter name to every selectable value.
    pub all: BTreeMap<&'static str, Vec<&'static str>>,
}

impl Settings {
    pub fn new(profile: Profile, language: Language, markup: MarkupType) -> Self {
        Self {
            profile,
            language,
            markup,
        }
    }

    /// Start from `defaults` and apply every parameter of `request`.
    pub fn from_request(request: &Request, defaults: Settings) -> Self {
        let mut settings = defaults;
        for (key, value) in &request.params {
            settings.set_setting(key, value);
        }
        settings
    }

    /// Apply a single `key=value` parameter.
    ///
    /// Returns whether the setting was recognised and applied.
    pub fn set_setting(&mut self, key: &str, value: &str) -> bool {
        let applied = if key == Profile::PARAM {
            apply(&mut self.profile, value)
        } else if key == Language::PARAM {
            apply(&mut self.language, value)
        } else if key == MarkupType::PARAM {
            apply(&mut self.markup, value)
        } else {
            false
        };

        if !applied {
            tracing::debug!(key, value, "ignoring unknown setting");
        }
        applied
    }

    pub fn renderer_settings(&self) -> RendererSettings {
        let current = BTreeMap::from([
            (Profile::PARAM, self.profile.name()),
            (Language::PARAM, self.language.name()),
            (MarkupType::PARAM, self.markup.name()),
        ]);
        let all = BTreeMap::from([
            (Profile::PARAM, names::<Profile>()),
            (Language::PARAM, names::<Language>()),
            (MarkupType::PARAM, names::<MarkupType>()),
        ]);
        RendererSettings { current, all }
    }
}

fn apply<C: Choice>(slot: &mut C, value: &str) -> bool {
    match C::parse(value) {
        Some(parsed) => {
            *slot = parsed;
            true
        }
        None => false,
    }
}

fn names<C: Choice>() -> Vec<&'static str> {
    C::all().iter().map(|c| c.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::parse_request;

    #[test]
    fn defaults_match_the_page_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.profile, Profile::Idea);
        assert_eq!(settings.language, Language::Java);
        assert_eq!(settings.markup, MarkupType::Inline);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Profile::parse("ECLIPSE"), Some(Profile::Eclipse));
        assert_eq!(Language::parse(" Xml "), Some(Language::Xml));
    }

    #[test]
    fn parse_accepts_underscore_for_hyphen() {
        assert_eq!(MarkupType::parse("class_based"), Some(MarkupType::ClassBased));
        assert_eq!(MarkupType::parse("class-based"), Some(MarkupType::ClassBased));
    }

    #[test]
    fn unknown_values_are_ignored() {
        let mut settings = Settings::default();

        assert!(!settings.set_setting("profile", "vim"));
        assert!(!settings.set_setting("theme", "dark"));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn known_values_are_applied() {
        let mut settings = Settings::default();

        assert!(settings.set_setting("profile", "netbeans"));
        assert!(settings.set_setting("language", "xml"));

        assert_eq!(settings.profile, Profile::Netbeans);
        assert_eq!(settings.language, Language::Xml);
    }

    #[test]
    fn from_request_applies_params_over_defaults() {
        let request = parse_request("profile=eclipse&bogus=1&source=x").unwrap();
        let defaults = Settings::new(Profile::Netbeans, Language::Xml, MarkupType::ClassBased);

        let settings = Settings::from_request(&request, defaults);

        assert_eq!(
            settings,
            Settings::new(Profile::Eclipse, Language::Xml, MarkupType::ClassBased)
        );
    }

    #[test]
    fn renderer_settings_list_current_and_all() {
        let mut settings = Settings::default();
        settings.set_setting("markup", "class-based");

        let rendered = settings.renderer_settings();

        assert_eq!(rendered.current["markup"], "class-based");
        assert_eq!(rendered.current["profile"], "idea");
        assert_eq!(rendered.all["profile"], vec!["idea", "eclipse", "netbeans"]);
        assert_eq!(rendered.all["language"], vec!["java", "xml"]);
    }

    #[test]
    fn renderer_settings_serialize_to_json() {
        let json = serde_json::to_value(Settings::default().renderer_settings()).unwrap();

        assert_eq!(json["current"]["language"], "java");
        assert_eq!(json["all"]["markup"][1], "class-based");
    }

    #[test]
    fn display_uses_parameter_names() {
        assert_eq!(MarkupType::ClassBased.to_string(), "class-based");
        assert_eq!(Profile::Netbeans.to_string(), "netbeans");
    }
}
