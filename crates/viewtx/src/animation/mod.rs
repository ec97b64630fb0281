//! Animation catalog: kinds, timing configuration and CSS generation.
//!
//! # Architecture
//!
//! ```text
//! TransitionSpec ──→ catalog::stylesheet ──→ Stylesheet ──→ String
//!       │
//!       └──→ fingerprint() ──→ StyleInjector dedup key
//! ```

pub mod catalog;
pub mod config;
pub mod kind;

pub use catalog::{generate_bundle, generate_css, motion, stylesheet, Motion};
pub use config::{
    AnimationConfig, Fingerprint, TransitionSpec, DEFAULT_DURATION_MS, DEFAULT_EASING,
};
pub use kind::AnimationKind;
