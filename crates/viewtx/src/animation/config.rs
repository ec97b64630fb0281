//! Timing configuration, transition specs and their fingerprints.

use super::kind::AnimationKind;
use crate::result::{ViewTxError, ViewTxResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default animation duration in milliseconds
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Default CSS timing function
pub const DEFAULT_EASING: &str = "ease";

/// Duration and timing function shared by the exit and enter animations.
///
/// The easing text is inserted into the generated CSS verbatim. Callers are
/// responsible for it being a valid CSS `<easing-function>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAnimationConfig")]
pub struct AnimationConfig {
    #[serde(rename = "duration")]
    duration_ms: u32,
    easing: String,
}

#[derive(Deserialize)]
struct RawAnimationConfig {
    #[serde(alias = "durationMs", alias = "duration_ms")]
    duration: u32,
    easing: String,
}

impl TryFrom<RawAnimationConfig> for AnimationConfig {
    type Error = ViewTxError;

    fn try_from(raw: RawAnimationConfig) -> Result<Self, Self::Error> {
        Self::new(raw.duration, raw.easing)
    }
}

impl AnimationConfig {
    /// Create a validated config
    ///
    /// # Errors
    ///
    /// Returns [`ViewTxError::InvalidDuration`] for a zero duration and
    /// [`ViewTxError::InvalidEasing`] for blank easing text.
    pub fn new(duration_ms: u32, easing: impl Into<String>) -> ViewTxResult<Self> {
        let easing = easing.into();
        if duration_ms == 0 {
            return Err(ViewTxError::InvalidDuration { duration_ms });
        }
        if easing.trim().is_empty() {
            return Err(ViewTxError::InvalidEasing);
        }
        Ok(Self {
            duration_ms,
            easing,
        })
    }

    /// Duration in milliseconds
    #[must_use]
    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// CSS timing function text
    #[must_use]
    pub fn easing(&self) -> &str {
        &self.easing
    }

    /// Duration formatted as a CSS time value, e.g. `300ms`
    #[must_use]
    pub fn css_duration(&self) -> String {
        format!("{}ms", self.duration_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: DEFAULT_EASING.to_string(),
        }
    }
}

/// Everything needed to animate one named transition group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTransitionSpec")]
pub struct TransitionSpec {
    name: String,
    animation: AnimationKind,
    config: AnimationConfig,
}

#[derive(Deserialize)]
struct RawTransitionSpec {
    name: String,
    animation: AnimationKind,
    #[serde(default)]
    config: AnimationConfig,
}

impl TryFrom<RawTransitionSpec> for TransitionSpec {
    type Error = ViewTxError;

    fn try_from(raw: RawTransitionSpec) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.animation, raw.config)
    }
}

impl TransitionSpec {
    /// Create a spec for the transition group `name`
    ///
    /// # Errors
    ///
    /// Returns [`ViewTxError::InvalidName`] if `name` is blank or contains
    /// whitespace, since it is used as a CSS `<custom-ident>`.
    pub fn new(
        name: impl Into<String>,
        animation: AnimationKind,
        config: AnimationConfig,
    ) -> ViewTxResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ViewTxError::invalid_name("name must not be empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ViewTxError::invalid_name(format!(
                "'{name}' must not contain whitespace"
            )));
        }
        Ok(Self {
            name,
            animation,
            config,
        })
    }

    /// Transition group name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Animation kind
    #[must_use]
    pub const fn animation(&self) -> AnimationKind {
        self.animation
    }

    /// Timing configuration
    #[must_use]
    pub const fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Deduplication key for the CSS generated from this spec
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(format!(
            "{}-{}-{}-{}",
            self.name, self.animation, self.config.duration_ms, self.config.easing
        ))
    }
}

/// Key identifying one generated CSS block: name, animation, duration and easing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Wrap a raw key
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
