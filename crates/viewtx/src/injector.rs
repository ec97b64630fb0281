//! Idempotent style injection.
//!
//! One [`StyleInjector`] owns one lazily created style container and the set
//! of fingerprints already written to it. CSS for a fingerprint is appended
//! at most once; nothing is ever removed.

use crate::animation::Fingerprint;
use crate::host::StyleHost;
use crate::result::ViewTxResult;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Attribute written on the style container by default
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-view-transitions";

/// Injector settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// Attribute placed on the style container so it can be located in the document
    pub marker_attribute: String,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            marker_attribute: DEFAULT_MARKER_ATTRIBUTE.to_string(),
        }
    }
}

impl InjectorConfig {
    /// Create the default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different marker attribute
    #[must_use]
    pub fn with_marker_attribute(mut self, marker: impl Into<String>) -> Self {
        self.marker_attribute = marker.into();
        self
    }
}

struct InjectorState<C> {
    container: Option<C>,
    seen: HashMap<Fingerprint, blake3::Hash>,
}

/// Appends generated CSS to a single style container, once per fingerprint.
pub struct StyleInjector<H: StyleHost> {
    host: Rc<H>,
    config: InjectorConfig,
    state: RefCell<InjectorState<H::Container>>,
}

impl<H: StyleHost> fmt::Debug for StyleInjector<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("StyleInjector")
            .field("config", &self.config)
            .field("has_container", &state.container.is_some())
            .field("injected", &state.seen.len())
            .finish()
    }
}

impl<H: StyleHost> StyleInjector<H> {
    /// Create an injector with the default config
    #[must_use]
    pub fn new(host: Rc<H>) -> Self {
        Self::with_config(host, InjectorConfig::default())
    }

    /// Create an injector with an explicit config
    #[must_use]
    pub fn with_config(host: Rc<H>, config: InjectorConfig) -> Self {
        Self {
            host,
            config,
            state: RefCell::new(InjectorState {
                container: None,
                seen: HashMap::new(),
            }),
        }
    }

    /// Injector settings
    #[must_use]
    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// Append `css` unless `fingerprint` was already injected.
    ///
    /// The style container is created on the first call that needs it. A
    /// repeat fingerprint is a no-op even when `css` differs; that case is
    /// logged as drift. The fingerprint is only recorded once the append
    /// succeeded, so a failed call can be retried.
    ///
    /// # Errors
    ///
    /// Propagates host failures from creating the container or appending.
    pub fn inject_once(&self, css: &str, fingerprint: &Fingerprint) -> ViewTxResult<()> {
        let digest = blake3::hash(css.as_bytes());
        let mut state = self.state.borrow_mut();

        if let Some(first) = state.seen.get(fingerprint) {
            if *first == digest {
                tracing::trace!(%fingerprint, "css already injected");
            } else {
                tracing::warn!(
                    %fingerprint,
                    "css for fingerprint changed after first injection; keeping the original"
                );
            }
            return Ok(());
        }

        if state.container.is_none() {
            let container = self
                .host
                .create_style_container(&self.config.marker_attribute)?;
            tracing::debug!(marker = %self.config.marker_attribute, "created style container");
            state.container = Some(container);
        }

        if let Some(container) = state.container.as_ref() {
            self.host.append_css(container, css)?;
        }
        state.seen.insert(fingerprint.clone(), digest);
        tracing::debug!(%fingerprint, bytes = css.len(), "injected css");
        Ok(())
    }

    /// Whether CSS for `fingerprint` has been injected
    #[must_use]
    pub fn is_injected(&self, fingerprint: &Fingerprint) -> bool {
        self.state.borrow().seen.contains_key(fingerprint)
    }

    /// Number of distinct fingerprints injected
    #[must_use]
    pub fn injected_count(&self) -> usize {
        self.state.borrow().seen.len()
    }

    /// Whether the style container exists yet
    #[must_use]
    pub fn has_container(&self) -> bool {
        self.state.borrow().container.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::host::MemoryDocument;

    fn setup() -> (Rc<MemoryDocument>, StyleInjector<MemoryDocument>) {
        let doc = Rc::new(MemoryDocument::new());
        let injector = StyleInjector::new(Rc::clone(&doc));
        (doc, injector)
    }

    // =========================================================================
    // Lazy container
    // =========================================================================

    #[test]
    fn container_created_lazily() {
        let (doc, injector) = setup();
        assert!(!injector.has_container());
        assert_eq!(doc.style_container_count(), 0);

        injector.inject_once("a{}", &Fingerprint::new("a")).unwrap();
        assert!(injector.has_container());
        assert_eq!(doc.style_container_count(), 1);
    }

    #[test]
    fn only_one_container_ever() {
        let (doc, injector) = setup();
        for i in 0..10 {
            injector
                .inject_once(&format!(".c{i}{{}}"), &Fingerprint::new(format!("c{i}")))
                .unwrap();
        }
        assert_eq!(doc.style_container_count(), 1);
        assert_eq!(injector.injected_count(), 10);
    }

    #[test]
    fn container_carries_marker_attribute() {
        let doc = Rc::new(MemoryDocument::new());
        let injector = StyleInjector::with_config(
            Rc::clone(&doc),
            InjectorConfig::new().with_marker_attribute("data-app-transitions"),
        );
        injector.inject_once("x{}", &Fingerprint::new("x")).unwrap();
        let id = doc.style_container_ids()[0];
        assert_eq!(doc.style_marker(id).unwrap(), "data-app-transitions");
    }

    // =========================================================================
    // Idempotence
    // =========================================================================

    #[test]
    fn same_fingerprint_injected_once() {
        let (doc, injector) = setup();
        let fp = Fingerprint::new("card-fadeIn-300-ease");
        injector.inject_once("card{}", &fp).unwrap();
        injector.inject_once("card{}", &fp).unwrap();
        assert_eq!(doc.all_style_text(), "card{}");
        assert!(injector.is_injected(&fp));
    }

    #[test]
    fn first_css_wins_for_a_fingerprint() {
        let (doc, injector) = setup();
        let fp = Fingerprint::new("k");
        injector.inject_once("first{}", &fp).unwrap();
        injector.inject_once("second{}", &fp).unwrap();
        assert_eq!(doc.all_style_text(), "first{}");
    }

    #[test]
    fn distinct_fingerprints_append_in_order() {
        let (doc, injector) = setup();
        injector.inject_once("one{}", &Fingerprint::new("1")).unwrap();
        injector.inject_once("two{}", &Fingerprint::new("2")).unwrap();
        assert_eq!(doc.all_style_text(), "one{}two{}");
    }

    // =========================================================================
    // Host failures
    // =========================================================================

    #[test]
    fn failed_container_creation_is_retryable() {
        let (doc, injector) = setup();
        let fp = Fingerprint::new("f");
        doc.set_head_missing(true);
        assert!(injector.inject_once("f{}", &fp).is_err());
        assert!(!injector.is_injected(&fp));

        doc.set_head_missing(false);
        injector.inject_once("f{}", &fp).unwrap();
        assert_eq!(doc.all_style_text(), "f{}");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: InjectorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.marker_attribute, DEFAULT_MARKER_ATTRIBUTE);
    }
}
