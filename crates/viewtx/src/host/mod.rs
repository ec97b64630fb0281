//! Host document abstractions.
//!
//! The library never talks to a document directly. It goes through three
//! narrow traits so the same binding code runs against the browser (on
//! `wasm32`) and against [`MemoryDocument`] in tests and tooling.
//!
//! All methods take `&self`: hosts are shared through `Rc` on the single UI
//! thread and use interior mutability where they keep state.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDocument;
pub use memory::{ContainerId, ElementId, MemoryDocument};

use crate::result::ViewTxResult;
use std::cell::RefCell;
use std::rc::Rc;

/// Document styling substrate: one place to put generated CSS.
pub trait StyleHost {
    /// Handle to a created style container
    type Container;

    /// Create a style container in the document, tagged with `marker_attribute`
    fn create_style_container(&self, marker_attribute: &str) -> ViewTxResult<Self::Container>;

    /// Append `css` to the end of the container's text
    fn append_css(&self, container: &Self::Container, css: &str) -> ViewTxResult<()>;
}

/// Element operations needed to tag transition participants.
pub trait ElementHost {
    /// Handle to a document element
    type Element: Clone;

    /// Create the wrapper element used by [`crate::TransitionContainer`]
    fn create_container_element(
        &self,
        class_name: Option<&str>,
        style: Option<&str>,
    ) -> ViewTxResult<Self::Element>;

    /// Append `child` under `parent`
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> ViewTxResult<()>;

    /// Write the element's `view-transition-name`
    fn set_transition_name(&self, element: &Self::Element, name: &str) -> ViewTxResult<()>;
}

/// Optional transition capability of the host environment.
pub trait TransitionHost {
    /// Whether a transition-aware state commit is available right now
    fn supports_transition(&self) -> bool;

    /// Run `update` inside the host transition mechanism.
    ///
    /// Returns the callback back as `Err` when the mechanism could not take
    /// it, so the caller can run it directly instead.
    fn run_in_transition(&self, update: Box<dyn FnOnce()>) -> Result<(), Box<dyn FnOnce()>>;
}

/// Everything a [`crate::TransitionController`] needs from its host.
pub trait DocumentHost: StyleHost + ElementHost + TransitionHost {}

impl<T: StyleHost + ElementHost + TransitionHost> DocumentHost for T {}

/// Hand `update` to `invoke` as a one-shot runner.
///
/// If `invoke` fails before the runner fired, the update is taken back out
/// and returned with the error so the caller can still run it. A runner that
/// already fired is never handed back.
pub(crate) fn dispatch_once<E>(
    update: Box<dyn FnOnce()>,
    invoke: impl FnOnce(Box<dyn FnOnce()>) -> Result<(), E>,
) -> Result<(), (Box<dyn FnOnce()>, E)> {
    let slot = Rc::new(RefCell::new(Some(update)));
    let pending = Rc::clone(&slot);
    let runner: Box<dyn FnOnce()> = Box::new(move || {
        let update = pending.borrow_mut().take();
        if let Some(update) = update {
            update();
        }
    });

    match invoke(runner) {
        Ok(()) => Ok(()),
        Err(err) => {
            let unrun = slot.borrow_mut().take();
            match unrun {
                Some(update) => Err((update, err)),
                None => Ok(()),
            }
        }
    }
}
