//! The closed set of transition animations.

use crate::result::ViewTxError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transition animation applied to a named transition group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    /// Old content leaves upward, new content enters from below
    SlideUp,
    /// Old content leaves downward, new content enters from above
    SlideDown,
    /// Old content leaves to the left, new content enters from the right
    SlideLeft,
    /// Old content leaves to the right, new content enters from the left
    SlideRight,
    /// Cross fade
    FadeIn,
    /// Shrink out to 80%, grow in from 80%
    ScaleIn,
    /// Subtle scale combined with fade
    FadeScale,
    /// Rotate around the horizontal axis
    FlipX,
    /// Rotate around the vertical axis
    FlipY,
}

impl AnimationKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 9] = [
        Self::SlideUp,
        Self::SlideDown,
        Self::SlideLeft,
        Self::SlideRight,
        Self::FadeIn,
        Self::ScaleIn,
        Self::FadeScale,
        Self::FlipX,
        Self::FlipY,
    ];

    /// Name used in manifests and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlideUp => "slideUp",
            Self::SlideDown => "slideDown",
            Self::SlideLeft => "slideLeft",
            Self::SlideRight => "slideRight",
            Self::FadeIn => "fadeIn",
            Self::ScaleIn => "scaleIn",
            Self::FadeScale => "fadeScale",
            Self::FlipX => "flipX",
            Self::FlipY => "flipY",
        }
    }

    /// Stem of the generated keyframe names (`<stem>-out`, `<stem>-in`)
    #[must_use]
    pub const fn keyframe_stem(self) -> &'static str {
        match self {
            Self::SlideUp => "slide-up",
            Self::SlideDown => "slide-down",
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::FadeIn => "fade",
            Self::ScaleIn => "scale",
            Self::FadeScale => "fade-scale",
            Self::FlipX => "flip-x",
            Self::FlipY => "flip-y",
        }
    }

    /// Keyframe name played on the outgoing snapshot
    #[must_use]
    pub fn exit_keyframes(self) -> String {
        format!("{}-out", self.keyframe_stem())
    }

    /// Keyframe name played on the incoming snapshot
    #[must_use]
    pub fn enter_keyframes(self) -> String {
        format!("{}-in", self.keyframe_stem())
    }

    fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationKind {
    type Err = ViewTxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ViewTxError::UnknownAnimation {
                name: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}
