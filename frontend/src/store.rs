//! Permission snapshot handed to the page tree through a context provider.
//!
//! The host page embeds the snapshot as JSON in a
//! `<script type="application/json" id="permission-snapshot">` element.

use shared::PermissionSnapshot;
use std::rc::Rc;

/// Id of the element carrying the snapshot JSON.
pub const SNAPSHOT_ELEMENT_ID: &str = "permission-snapshot";

/// Read-only view of the permission matrix. `None` until the host provides one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionStore {
    pub snapshot: Option<Rc<PermissionSnapshot>>,
}

impl PermissionStore {
    pub fn new(snapshot: PermissionSnapshot) -> Self {
        Self {
            snapshot: Some(Rc::new(snapshot)),
        }
    }

    /// Read the snapshot embedded in the current document.
    pub fn from_document() -> Self {
        match gloo::utils::document()
            .get_element_by_id(SNAPSHOT_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(json) => Self::from_json(&json),
            None => {
                log::debug!("No permission snapshot in document");
                Self::default()
            }
        }
    }

    /// Parse the snapshot JSON handed over by the host page. Malformed input
    /// leaves the store empty, which the page treats as "not loaded yet".
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<PermissionSnapshot>(json) {
            Ok(snapshot) => Self::new(snapshot),
            Err(e) => {
                log::warn!("Ignoring malformed permission snapshot: {}", e);
                Self::default()
            }
        }
    }
}
