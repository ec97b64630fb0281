//! Animation catalog: maps a [`TransitionSpec`] to view transition CSS.
//!
//! Each kind interpolates between a neutral state and an offset state.
//! Opacity always runs 1 → 0 on the outgoing snapshot and 0 → 1 on the
//! incoming one.

use super::config::{Fingerprint, TransitionSpec};
use super::kind::AnimationKind;
use crate::css::{CssRule, KeyframeStep, KeyframesRule, Stylesheet};
use std::collections::HashSet;

/// Transform endpoints for one kind. `None` means opacity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    /// Exit animation `(from, to)` transforms
    pub exit: Option<(&'static str, &'static str)>,
    /// Enter animation `(from, to)` transforms
    pub enter: Option<(&'static str, &'static str)>,
}

impl Motion {
    const fn transform(
        exit: (&'static str, &'static str),
        enter: (&'static str, &'static str),
    ) -> Self {
        Self {
            exit: Some(exit),
            enter: Some(enter),
        }
    }

    const fn opacity_only() -> Self {
        Self {
            exit: None,
            enter: None,
        }
    }
}

/// Transform endpoints for `kind`
#[must_use]
pub const fn motion(kind: AnimationKind) -> Motion {
    match kind {
        AnimationKind::SlideUp => Motion::transform(
            ("translateY(0)", "translateY(-100%)"),
            ("translateY(100%)", "translateY(0)"),
        ),
        AnimationKind::SlideDown => Motion::transform(
            ("translateY(0)", "translateY(100%)"),
            ("translateY(-100%)", "translateY(0)"),
        ),
        AnimationKind::SlideLeft => Motion::transform(
            ("translateX(0)", "translateX(-100%)"),
            ("translateX(100%)", "translateX(0)"),
        ),
        AnimationKind::SlideRight => Motion::transform(
            ("translateX(0)", "translateX(100%)"),
            ("translateX(-100%)", "translateX(0)"),
        ),
        AnimationKind::FadeIn => Motion::opacity_only(),
        AnimationKind::ScaleIn => {
            Motion::transform(("scale(1)", "scale(0.8)"), ("scale(0.8)", "scale(1)"))
        }
        AnimationKind::FadeScale => {
            Motion::transform(("scale(1)", "scale(0.95)"), ("scale(1.05)", "scale(1)"))
        }
        AnimationKind::FlipX => Motion::transform(
            ("rotateX(0deg)", "rotateX(-90deg)"),
            ("rotateX(90deg)", "rotateX(0deg)"),
        ),
        AnimationKind::FlipY => Motion::transform(
            ("rotateY(0deg)", "rotateY(-90deg)"),
            ("rotateY(90deg)", "rotateY(0deg)"),
        ),
    }
}

fn keyframes(
    name: String,
    transform: Option<(&'static str, &'static str)>,
    opacity: (&str, &str),
) -> KeyframesRule {
    let mut from = KeyframeStep::new("from");
    let mut to = KeyframeStep::new("to");
    if let Some((start, end)) = transform {
        from = from.declaration("transform", start);
        to = to.declaration("transform", end);
    }
    KeyframesRule::new(name)
        .step(from.declaration("opacity", opacity.0))
        .step(to.declaration("opacity", opacity.1))
}

/// Build the stylesheet for `spec`: the old and new snapshot rules for the
/// named group followed by the exit and enter keyframes.
#[must_use]
pub fn stylesheet(spec: &TransitionSpec) -> Stylesheet {
    let kind = spec.animation();
    let config = spec.config();
    let timing = format!("{} {}", config.css_duration(), config.easing());
    let exit_name = kind.exit_keyframes();
    let enter_name = kind.enter_keyframes();
    let motion = motion(kind);

    Stylesheet::new()
        .rule(
            CssRule::new(format!("::view-transition-old({})", spec.name()))
                .declaration("animation", format!("{exit_name} {timing}")),
        )
        .rule(
            CssRule::new(format!("::view-transition-new({})", spec.name()))
                .declaration("animation", format!("{enter_name} {timing}")),
        )
        .keyframes(keyframes(exit_name, motion.exit, ("1", "0")))
        .keyframes(keyframes(enter_name, motion.enter, ("0", "1")))
}

/// Generate the CSS text for `spec`. Pure: identical input gives
/// byte-identical output.
#[must_use]
pub fn generate_css(spec: &TransitionSpec) -> String {
    stylesheet(spec).render()
}

/// Generate CSS for several specs as one stylesheet. Specs whose
/// fingerprint was already emitted are skipped, first one wins.
#[must_use]
pub fn generate_bundle(specs: &[TransitionSpec]) -> String {
    let mut seen: HashSet<Fingerprint> = HashSet::new();
    let mut bundle = String::new();
    for spec in specs {
        if seen.insert(spec.fingerprint()) {
            bundle.push_str(&generate_css(spec));
        }
    }
    bundle
}
