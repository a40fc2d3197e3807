//! Localized strings for every user-visible label
//!
//! Catalogs are flat JSON objects bundled into the binary. Lookups fall back
//! to English and then to the catalog key itself, so a missing translation
//! never hides a label.

use anyhow::{Context, Result};
use std::collections::HashMap;

/// Language used when nothing else matches
pub const DEFAULT_LANGUAGE: &str = "en";

/// Bundled catalogs, keyed by primary language subtag
const CATALOGS: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("de", include_str!("../locales/de.json")),
];

/// Lookup keys for every translated string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum I18nKey {
    GoalPageTitle,
    WhyAreWeAsking,
    GoalPageFirstParagraph,
    GoalPageSecondParagraph,
    GoalPageThirdParagraph,
    /// Interpolates `{{goal}}`
    ToAchieveGoal,
    SeeResults,
    GoalLoseWeight,
    GoalMaintainWeight,
    GoalGainWeight,
    ErrorRequired,
    ErrorInvalidChoice,
    ResultPageTitle,
    ResultNoGoal,
    SubmissionSaving,
    SubmissionNotSaved,
    OpenGuide,
    StartOver,
    Quit,
    GoBackToResults,
    GuideNotFound,
    ConsentOn,
    ConsentOff,
    HintGoal,
    HintResult,
    HintGuide,
}

impl I18nKey {
    /// Catalog key for this entry
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalPageTitle => "goal_page_title",
            Self::WhyAreWeAsking => "why_are_we_asking",
            Self::GoalPageFirstParagraph => "goal_page_first_paragraph",
            Self::GoalPageSecondParagraph => "goal_page_second_paragraph",
            Self::GoalPageThirdParagraph => "goal_page_third_paragraph",
            Self::ToAchieveGoal => "to_achieve_goal",
            Self::SeeResults => "see_results",
            Self::GoalLoseWeight => "goal_lose_weight",
            Self::GoalMaintainWeight => "goal_maintain_weight",
            Self::GoalGainWeight => "goal_gain_weight",
            Self::ErrorRequired => "error_required",
            Self::ErrorInvalidChoice => "error_invalid_choice",
            Self::ResultPageTitle => "result_page_title",
            Self::ResultNoGoal => "result_no_goal",
            Self::SubmissionSaving => "submission_saving",
            Self::SubmissionNotSaved => "submission_not_saved",
            Self::OpenGuide => "open_guide",
            Self::StartOver => "start_over",
            Self::Quit => "quit",
            Self::GoBackToResults => "go_back_to_results",
            Self::GuideNotFound => "guide_not_found",
            Self::ConsentOn => "consent_on",
            Self::ConsentOff => "consent_off",
            Self::HintGoal => "hint_goal",
            Self::HintResult => "hint_result",
            Self::HintGuide => "hint_guide",
        }
    }
}

type Catalog = HashMap<String, String>;

/// Resolves [`I18nKey`]s to display strings in one language
#[derive(Debug, Clone)]
pub struct Translator {
    language: &'static str,
    catalog: Catalog,
    fallback: Catalog,
}

impl Translator {
    /// Build a translator for the requested language tag (e.g. `de_DE.UTF-8`)
    pub fn new(requested: Option<&str>) -> Result<Self> {
        let language = resolve_language(requested);
        let fallback = load_catalog(DEFAULT_LANGUAGE)?;
        let catalog = if language == DEFAULT_LANGUAGE {
            fallback.clone()
        } else {
            load_catalog(language)?
        };

        tracing::debug!(?requested, language, "Resolved UI language");

        Ok(Self {
            language,
            catalog,
            fallback,
        })
    }

    /// The language actually in use
    pub fn resolved_language(&self) -> &'static str {
        self.language
    }

    /// Translate a key
    pub fn t(&self, key: I18nKey) -> String {
        self.lookup(key).to_string()
    }

    /// Translate a key and replace `{{name}}` placeholders
    pub fn t_with(&self, key: I18nKey, params: &[(&str, &str)]) -> String {
        let mut text = self.lookup(key).to_string();
        for (name, value) in params {
            text = text.replace(&format!("{{{{{name}}}}}"), value);
        }
        text
    }

    fn lookup(&self, key: I18nKey) -> &str {
        let name = key.as_str();
        self.catalog
            .get(name)
            .or_else(|| self.fallback.get(name))
            .map(String::as_str)
            .unwrap_or(name)
    }
}

/// Reduce a language tag to a bundled catalog, defaulting to English
pub fn resolve_language(requested: Option<&str>) -> &'static str {
    let Some(tag) = requested else {
        return DEFAULT_LANGUAGE;
    };
    let primary = tag
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    CATALOGS
        .iter()
        .map(|(lang, _)| *lang)
        .find(|lang| *lang == primary)
        .unwrap_or(DEFAULT_LANGUAGE)
}

fn load_catalog(language: &str) -> Result<Catalog> {
    let source = CATALOGS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, source)| *source)
        .with_context(|| format!("No catalog bundled for language '{language}'"))?;
    serde_json::from_str(source).with_context(|| format!("Malformed catalog for '{language}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_KEYS: &[I18nKey] = &[
        I18nKey::GoalPageTitle,
        I18nKey::WhyAreWeAsking,
        I18nKey::GoalPageFirstParagraph,
        I18nKey::GoalPageSecondParagraph,
        I18nKey::GoalPageThirdParagraph,
        I18nKey::ToAchieveGoal,
        I18nKey::SeeResults,
        I18nKey::GoalLoseWeight,
        I18nKey::GoalMaintainWeight,
        I18nKey::GoalGainWeight,
        I18nKey::ErrorRequired,
        I18nKey::ErrorInvalidChoice,
        I18nKey::ResultPageTitle,
        I18nKey::ResultNoGoal,
        I18nKey::SubmissionSaving,
        I18nKey::SubmissionNotSaved,
        I18nKey::OpenGuide,
        I18nKey::StartOver,
        I18nKey::Quit,
        I18nKey::GoBackToResults,
        I18nKey::GuideNotFound,
        I18nKey::ConsentOn,
        I18nKey::ConsentOff,
        I18nKey::HintGoal,
        I18nKey::HintResult,
        I18nKey::HintGuide,
    ];

    #[test]
    fn test_resolve_language_primary_subtag() {
        assert_eq!(resolve_language(Some("de_DE.UTF-8")), "de");
        assert_eq!(resolve_language(Some("de-AT")), "de");
        assert_eq!(resolve_language(Some("EN")), "en");
    }

    #[test]
    fn test_resolve_language_unknown_falls_back() {
        assert_eq!(resolve_language(Some("fr_FR")), "en");
        assert_eq!(resolve_language(Some("C")), "en");
        assert_eq!(resolve_language(Some("")), "en");
        assert_eq!(resolve_language(None), "en");
    }

    #[test]
    fn test_english_catalog_is_complete() {
        let translator = Translator::new(Some("en")).unwrap();
        for key in ALL_KEYS {
            assert_ne!(translator.t(*key), key.as_str(), "missing {key:?}");
        }
    }

    #[test]
    fn test_german_lookup() {
        let translator = Translator::new(Some("de")).unwrap();
        assert_eq!(translator.resolved_language(), "de");
        assert_eq!(translator.t(I18nKey::GoalGainWeight), "Zunehmen");
    }

    #[test]
    fn test_missing_translation_falls_back_to_english() {
        let translator = Translator::new(Some("de")).unwrap();
        assert_eq!(
            translator.t(I18nKey::HintGuide),
            "j/k:scroll  d/u:page  Esc:back"
        );
    }

    #[test]
    fn test_interpolation() {
        let translator = Translator::new(None).unwrap();
        let text = translator.t_with(I18nKey::ToAchieveGoal, &[("goal", "gain weight")]);
        assert_eq!(text, "To achieve goal: gain weight");
    }

    #[test]
    fn test_interpolation_ignores_unknown_params() {
        let translator = Translator::new(None).unwrap();
        let text = translator.t_with(I18nKey::SeeResults, &[("goal", "x")]);
        assert_eq!(text, "See results");
    }
}
