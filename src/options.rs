//! Width computation options.

use std::{env, fmt, str::FromStr};

/// Environment variable read by [`WidthOptions::from_env`].
pub const AMBIGUOUS_WIDTH_ENV: &str = "UNICODE_WIDTH_AMBIGUOUS";

/// How East Asian Ambiguous code points are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AmbiguousWidth {
    /// One column, the usual choice outside East Asian locales.
    #[default]
    Narrow,
    /// Two columns, matching legacy CJK terminals.
    Wide,
}

impl AmbiguousWidth {
    /// Parse a user-supplied descriptor (case-insensitive).
    ///
    /// # Errors
    /// Returns [`AmbiguousWidthError::Empty`] when `value` is blank, or
    /// [`AmbiguousWidthError::Unsupported`] when the descriptor is unknown.
    pub fn parse(value: &str) -> Result<Self, AmbiguousWidthError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AmbiguousWidthError::Empty);
        }
        let lower = trimmed.to_ascii_lowercase();
        match lower.as_str() {
            "narrow" | "1" | "half" | "western" => Ok(AmbiguousWidth::Narrow),
            "wide" | "2" | "full" | "cjk" | "east-asian" => Ok(AmbiguousWidth::Wide),
            other => Err(AmbiguousWidthError::Unsupported(other.to_string())),
        }
    }

    /// Return a canonical string for diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AmbiguousWidth::Narrow => "narrow",
            AmbiguousWidth::Wide => "wide",
        }
    }
}

impl fmt::Display for AmbiguousWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmbiguousWidth {
    type Err = AmbiguousWidthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors produced while parsing an [`AmbiguousWidth`] descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmbiguousWidthError {
    /// The descriptor was empty or whitespace.
    Empty,
    /// The descriptor named no known policy.
    Unsupported(String),
}

impl fmt::Display for AmbiguousWidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmbiguousWidthError::Empty => f.write_str("ambiguous width policy cannot be empty"),
            AmbiguousWidthError::Unsupported(other) => write!(
                f,
                "unsupported ambiguous width policy '{other}' (expected 'narrow' or 'wide')"
            ),
        }
    }
}

impl std::error::Error for AmbiguousWidthError {}

/// Options shared by every width entry point that takes a `_with` suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidthOptions {
    /// Width of East Asian Ambiguous code points.
    pub ambiguous: AmbiguousWidth,
}

impl WidthOptions {
    /// Default options: ambiguous code points are narrow.
    pub const fn new() -> Self {
        WidthOptions {
            ambiguous: AmbiguousWidth::Narrow,
        }
    }

    /// Options for CJK contexts, where ambiguous code points are wide.
    pub const fn cjk() -> Self {
        WidthOptions {
            ambiguous: AmbiguousWidth::Wide,
        }
    }

    /// Returns a copy with the given ambiguous width policy.
    #[must_use]
    pub const fn with_ambiguous(mut self, ambiguous: AmbiguousWidth) -> Self {
        self.ambiguous = ambiguous;
        self
    }

    /// Reads options from the environment.
    ///
    /// `UNICODE_WIDTH_AMBIGUOUS` selects the ambiguous width policy; an unset
    /// or empty variable keeps the default.
    ///
    /// # Errors
    /// Returns [`AmbiguousWidthError::Unsupported`] when the variable holds an
    /// unknown policy.
    pub fn from_env() -> Result<Self, AmbiguousWidthError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AmbiguousWidthError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let mut options = Self::new();
        if let Some(value) = lookup(AMBIGUOUS_WIDTH_ENV) {
            if !value.trim().is_empty() {
                options.ambiguous = AmbiguousWidth::parse(&value)?;
                tracing::debug!(
                    ambiguous = options.ambiguous.as_str(),
                    "ambiguous width policy taken from {}",
                    AMBIGUOUS_WIDTH_ENV
                );
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::{AmbiguousWidth, AmbiguousWidthError, WidthOptions, AMBIGUOUS_WIDTH_ENV};

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Ok(AmbiguousWidth::Narrow), AmbiguousWidth::parse("narrow"));
        assert_eq!(Ok(AmbiguousWidth::Narrow), AmbiguousWidth::parse(" Half "));
        assert_eq!(Ok(AmbiguousWidth::Narrow), AmbiguousWidth::parse("1"));
        assert_eq!(Ok(AmbiguousWidth::Wide), AmbiguousWidth::parse("WIDE"));
        assert_eq!(Ok(AmbiguousWidth::Wide), AmbiguousWidth::parse("cjk"));
        assert_eq!(Ok(AmbiguousWidth::Wide), "east-asian".parse());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(AmbiguousWidthError::Empty), AmbiguousWidth::parse("   "));
        let err = AmbiguousWidth::parse("Triple").unwrap_err();
        assert_eq!(AmbiguousWidthError::Unsupported("triple".to_string()), err);
        assert_eq!(
            "unsupported ambiguous width policy 'triple' (expected 'narrow' or 'wide')",
            err.to_string()
        );
    }

    #[test]
    fn test_display_round_trips() {
        for policy in [AmbiguousWidth::Narrow, AmbiguousWidth::Wide] {
            assert_eq!(Ok(policy), policy.to_string().parse());
        }
    }

    #[test]
    fn test_constructors() {
        assert_eq!(WidthOptions::default(), WidthOptions::new());
        assert_eq!(AmbiguousWidth::Wide, WidthOptions::cjk().ambiguous);
        assert_eq!(
            WidthOptions::cjk(),
            WidthOptions::new().with_ambiguous(AmbiguousWidth::Wide)
        );
    }

    #[test]
    fn test_from_lookup() {
        let unset = WidthOptions::from_lookup(|_| None);
        assert_eq!(Ok(WidthOptions::new()), unset);

        let empty = WidthOptions::from_lookup(|_| Some(String::new()));
        assert_eq!(Ok(WidthOptions::new()), empty);

        let wide = WidthOptions::from_lookup(|key| {
            assert_eq!(AMBIGUOUS_WIDTH_ENV, key);
            Some("wide".to_string())
        });
        assert_eq!(Ok(WidthOptions::cjk()), wide);

        let bad = WidthOptions::from_lookup(|_| Some("sideways".to_string()));
        assert!(matches!(bad, Err(AmbiguousWidthError::Unsupported(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&WidthOptions::cjk()).unwrap();
        assert_eq!(r#"{"ambiguous":"wide"}"#, json);
        let parsed: WidthOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(WidthOptions::cjk(), parsed);
        let defaulted: WidthOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(WidthOptions::new(), defaulted);
    }
}
