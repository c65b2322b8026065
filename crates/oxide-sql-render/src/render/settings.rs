//! Rendering settings.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// How values that are not marked inline are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamStyle {
    /// The dialect's own placeholder (`$1` on PostgreSQL, `:1` on Oracle, `?`
    /// elsewhere).
    #[default]
    Dialect,
    /// Always `?`.
    Positional,
    /// Escaped literals; no parameters are collected.
    Inline,
}

/// Letter case of keywords and built-in function names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCase {
    /// `OVERLAY`, `SUBSTRING`.
    #[default]
    Upper,
    /// `overlay`, `substring`.
    Lower,
}

impl KeywordCase {
    /// Applies the case to an upper-case token.
    #[must_use]
    pub fn apply(self, token: &str) -> String {
        match self {
            Self::Upper => String::from(token),
            Self::Lower => token.to_ascii_lowercase(),
        }
    }
}

/// Settings of a rendering context.
///
/// Every field has a default, so a settings document only needs the fields
/// it changes:
///
/// ```rust
/// use oxide_sql_render::render::{ParamStyle, RenderSettings};
///
/// let settings = RenderSettings::from_json(r#"{"param_style": "inline"}"#).unwrap();
/// assert_eq!(settings.param_style, ParamStyle::Inline);
/// assert_eq!(settings.max_depth, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// How bind values are emitted.
    pub param_style: ParamStyle,
    /// Case of keywords and function names.
    pub keyword_case: KeywordCase,
    /// Maximum nesting of `visit` calls, unbounded when `None`.
    ///
    /// Emulations nest deeper than the tree they replace: an emulated row
    /// ordering of degree `n` is about `2n` levels deep.
    pub max_depth: Option<usize>,
    /// Quote column identifiers with the dialect's quote character.
    pub quote_identifiers: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            param_style: ParamStyle::Dialect,
            keyword_case: KeywordCase::Upper,
            max_depth: None,
            quote_identifiers: false,
        }
    }
}

impl RenderSettings {
    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the parameter style.
    #[must_use]
    pub const fn with_param_style(mut self, param_style: ParamStyle) -> Self {
        self.param_style = param_style;
        self
    }

    /// Sets the keyword case.
    #[must_use]
    pub const fn with_keyword_case(mut self, keyword_case: KeywordCase) -> Self {
        self.keyword_case = keyword_case;
        self
    }

    /// Bounds the nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Enables or disables identifier quoting.
    #[must_use]
    pub const fn with_quoted_identifiers(mut self, quote: bool) -> Self {
        self.quote_identifiers = quote;
        self
    }
}
