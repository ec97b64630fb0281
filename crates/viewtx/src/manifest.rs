//! Transition manifests: a list of transitions loaded from YAML or JSON.
//!
//! ```yaml
//! defaults:
//!   duration: 250
//!   easing: ease-out
//! injector:
//!   marker_attribute: data-app-transitions
//! transitions:
//!   - name: card
//!     animation: fadeIn
//!   - name: sidebar
//!     animation: slideLeft
//!     config: { duration: 400, easing: linear }
//! ```

use crate::animation::{generate_bundle, AnimationConfig, AnimationKind, TransitionSpec};
use crate::binding::TransitionController;
use crate::host::DocumentHost;
use crate::injector::InjectorConfig;
use crate::result::{ViewTxError, ViewTxResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One manifest entry. `config` falls back to the manifest defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Transition group name
    pub name: String,
    /// Animation name, e.g. `fadeIn`
    pub animation: String,
    /// Timing override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<AnimationConfig>,
}

/// A set of transitions with shared defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionManifest {
    /// Timing used by entries without their own config
    #[serde(default)]
    pub defaults: AnimationConfig,
    /// Style container settings
    #[serde(default)]
    pub injector: InjectorConfig,
    /// Transitions in output order
    #[serde(default)]
    pub transitions: Vec<ManifestEntry>,
}

impl TransitionManifest {
    /// Parse a YAML manifest
    pub fn from_yaml_str(content: &str) -> ViewTxResult<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Parse a JSON manifest
    pub fn from_json_str(content: &str) -> ViewTxResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a manifest, choosing the format from the file extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn load(path: &Path) -> ViewTxResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let content = match extension.as_deref() {
            Some("yaml" | "yml" | "json") => fs::read_to_string(path)?,
            _ => {
                return Err(ViewTxError::manifest(format!(
                    "{}: expected a .yaml, .yml or .json file",
                    path.display()
                )))
            }
        };
        tracing::debug!(path = %path.display(), "loading transition manifest");
        if extension.as_deref() == Some("json") {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Resolve every entry into a validated [`TransitionSpec`]
    ///
    /// # Errors
    ///
    /// Fails on the first entry with an unknown animation or invalid name.
    pub fn specs(&self) -> ViewTxResult<Vec<TransitionSpec>> {
        self.transitions
            .iter()
            .map(|entry| {
                let animation: AnimationKind = entry.animation.parse()?;
                let config = entry
                    .config
                    .clone()
                    .unwrap_or_else(|| self.defaults.clone());
                TransitionSpec::new(entry.name.clone(), animation, config)
            })
            .collect()
    }

    /// Render every entry as one stylesheet, in order. Entries with a
    /// repeated fingerprint appear once, matching what a document holds
    /// after binding them all.
    pub fn render_stylesheet(&self) -> ViewTxResult<String> {
        let specs = self.specs()?;
        let css = generate_bundle(&specs);
        tracing::debug!(
            entries = self.transitions.len(),
            bytes = css.len(),
            "rendered manifest stylesheet"
        );
        Ok(css)
    }

    /// Controller over `host` using this manifest's injector settings
    #[must_use]
    pub fn controller<H: DocumentHost>(&self, host: H) -> TransitionController<H> {
        TransitionController::with_config(host, self.injector.clone())
    }
}
