//! Browser host backed by `web-sys`.
//!
//! Style containers are `<style>` elements appended to `document.head`.
//! The transition capability is a callable `document.startViewTransition`,
//! looked up on every call. If it throws before running the update, the
//! update is handed back to the caller.

use super::{dispatch_once, ElementHost, StyleHost, TransitionHost};
use crate::result::{ViewTxError, ViewTxResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlStyleElement};

const START_VIEW_TRANSITION: &str = "startViewTransition";

fn js_error(context: &str, err: &JsValue) -> ViewTxError {
    ViewTxError::host(format!("{context}: {err:?}"))
}

/// Host for a live browser document.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    /// Host for `window.document`
    ///
    /// # Errors
    ///
    /// Returns a host error when there is no window or document, e.g. inside
    /// a worker.
    pub fn new() -> ViewTxResult<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::from_document)
            .ok_or_else(|| ViewTxError::host("no window.document available"))
    }

    /// Host for an explicit document
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    fn start_view_transition(&self) -> Option<js_sys::Function> {
        js_sys::Reflect::get(&self.document, &JsValue::from_str(START_VIEW_TRANSITION))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }
}

impl StyleHost for BrowserDocument {
    type Container = HtmlStyleElement;

    fn create_style_container(&self, marker_attribute: &str) -> ViewTxResult<HtmlStyleElement> {
        let head = self
            .document
            .head()
            .ok_or_else(|| ViewTxError::host("document has no <head>"))?;
        let element = self
            .document
            .create_element("style")
            .map_err(|e| js_error("create <style>", &e))?;
        element
            .set_attribute(marker_attribute, "")
            .map_err(|e| js_error("set marker attribute", &e))?;
        head.append_child(&element)
            .map_err(|e| js_error("append <style> to <head>", &e))?;
        element
            .dyn_into::<HtmlStyleElement>()
            .map_err(|_| ViewTxError::host("created element is not a <style>"))
    }

    fn append_css(&self, container: &HtmlStyleElement, css: &str) -> ViewTxResult<()> {
        let mut text = container.text_content().unwrap_or_default();
        text.push_str(css);
        container.set_text_content(Some(&text));
        Ok(())
    }
}

impl ElementHost for BrowserDocument {
    type Element = HtmlElement;

    fn create_container_element(
        &self,
        class_name: Option<&str>,
        style: Option<&str>,
    ) -> ViewTxResult<HtmlElement> {
        let element = self
            .document
            .create_element("div")
            .map_err(|e| js_error("create <div>", &e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ViewTxError::host("created element is not an HTMLElement"))?;
        if let Some(class_name) = class_name {
            element.set_class_name(class_name);
        }
        if let Some(style) = style {
            element
                .set_attribute("style", style)
                .map_err(|e| js_error("set style attribute", &e))?;
        }
        Ok(element)
    }

    fn append_child(&self, parent: &HtmlElement, child: &HtmlElement) -> ViewTxResult<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| js_error("append child", &e))
    }

    fn set_transition_name(&self, element: &HtmlElement, name: &str) -> ViewTxResult<()> {
        element
            .style()
            .set_property("view-transition-name", name)
            .map_err(|e| js_error("set view-transition-name", &e))
    }
}

impl TransitionHost for BrowserDocument {
    fn supports_transition(&self) -> bool {
        self.start_view_transition().is_some()
    }

    fn run_in_transition(&self, update: Box<dyn FnOnce()>) -> Result<(), Box<dyn FnOnce()>> {
        let Some(start) = self.start_view_transition() else {
            return Err(update);
        };

        dispatch_once(update, |runner| {
            let callback = Closure::once_into_js(move || runner());
            start.call1(&self.document, &callback).map(|_| ())
        })
        .map_err(|(update, err)| {
            tracing::warn!(error = ?err, "startViewTransition threw, running update directly");
            update
        })
    }
}
