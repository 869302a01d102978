// =============================================================================
// CS:GO Pro Web - Host Environment
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Error Types
// 3. PageHost Trait
// 4. Test Host
// =============================================================================

pub mod browser;

pub use browser::{BrowserHost, ListenerHandle, ObserverHandle};

use thiserror::Error;

// -----------------------------------------------------------------------------
// 2. Error Types
// -----------------------------------------------------------------------------

/// Host environment error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("No window object available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),
}

// -----------------------------------------------------------------------------
// 3. PageHost Trait
// -----------------------------------------------------------------------------

/// The parts of the browsing surface the interaction controller needs.
pub trait PageHost {
    /// Current vertical scroll offset in CSS px.
    fn scroll_offset(&self) -> Result<f64, HostError>;

    /// Smoothly scroll so the element with id `anchor` sits at the top of the
    /// viewport. `Ok(false)` when no such element exists.
    fn scroll_to_anchor(&self, anchor: &str) -> Result<bool, HostError>;
}

// -----------------------------------------------------------------------------
// 4. Test Host
// -----------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::{Cell, RefCell};

    use super::{HostError, PageHost};

    /// In-memory host that records scroll requests.
    pub struct MockHost {
        anchors: Option<Vec<String>>,
        offset: Cell<f64>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl MockHost {
        pub fn with_anchors(anchors: &[&str]) -> Self {
            Self {
                anchors: Some(anchors.iter().map(|a| a.to_string()).collect()),
                offset: Cell::new(0.0),
                scrolled_to: RefCell::new(Vec::new()),
            }
        }

        /// Host with no window, as when running outside a browser.
        pub fn unavailable() -> Self {
            Self {
                anchors: None,
                offset: Cell::new(0.0),
                scrolled_to: RefCell::new(Vec::new()),
            }
        }

        pub fn scrolled_to(&self) -> Vec<String> {
            self.scrolled_to.borrow().clone()
        }

        pub fn set_offset(&self, offset: f64) {
            self.offset.set(offset);
        }
    }

    impl PageHost for MockHost {
        fn scroll_offset(&self) -> Result<f64, HostError> {
            match self.anchors {
                Some(_) => Ok(self.offset.get()),
                None => Err(HostError::NoWindow),
            }
        }

        fn scroll_to_anchor(&self, anchor: &str) -> Result<bool, HostError> {
            let anchors = self.anchors.as_ref().ok_or(HostError::NoWindow)?;
            if anchors.iter().any(|a| a == anchor) {
                self.scrolled_to.borrow_mut().push(anchor.to_string());
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }
}
