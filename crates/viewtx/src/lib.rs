//! viewtx: view transition animations for Rust web front ends
//!
//! Generates `::view-transition-old/new` rules and keyframes for a small
//! catalog of animations, injects them into the document once per
//! configuration, and wraps state changes in the host's view transition
//! mechanism when it exists.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  TransitionSpec ──► Catalog ──► CSS ──► StyleInjector ──► <style>│
//! │        │                                  (dedup by fingerprint) │
//! │        └──► TransitionBinding ──► element view-transition-name   │
//! │                    │                                             │
//! │                 Trigger ──► startViewTransition(cb) | cb()       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use viewtx::{AnimationConfig, AnimationKind, MemoryDocument, TransitionController, TransitionSpec};
//!
//! let controller = TransitionController::new(MemoryDocument::new());
//! let spec = TransitionSpec::new("card", AnimationKind::FadeIn, AnimationConfig::default())?;
//! let (mut binding, trigger) = controller.bind(spec)?;
//!
//! let element = controller.host().create_element("div");
//! binding.mount(element)?;
//! trigger.start(|| { /* update application state */ });
//!
//! assert!(controller.host().all_style_text().contains("::view-transition-new(card)"));
//! # Ok::<(), viewtx::ViewTxError>(())
//! ```

#![warn(missing_docs)]

pub mod animation;
pub mod binding;
pub mod container;
pub mod css;
pub mod host;
pub mod injector;
pub mod manifest;
mod result;

pub use animation::{
    generate_bundle, generate_css, AnimationConfig, AnimationKind, Fingerprint, TransitionSpec,
};
pub use binding::{StartTransitionFn, TransitionBinding, TransitionController, Trigger, UpdateEffects};
pub use container::{ContainerProps, TransitionContainer};
#[cfg(target_arch = "wasm32")]
pub use host::BrowserDocument;
pub use host::{DocumentHost, ElementHost, MemoryDocument, StyleHost, TransitionHost};
pub use injector::{InjectorConfig, StyleInjector, DEFAULT_MARKER_ATTRIBUTE};
pub use manifest::{ManifestEntry, TransitionManifest};
pub use result::{ViewTxError, ViewTxResult};
