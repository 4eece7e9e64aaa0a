//! Permission snapshot lookup and request-access URL resolution.
//!
//! The permission matrix is held client side and injected by the caller; this
//! module only reads it. When the matrix has parameters for a key, exactly one
//! call is made to the authorization service to turn them into a URL.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Parameters needed to request access to an action. Never inspected here,
/// only forwarded to the authorization service.
pub type ParameterPayload = serde_json::Value;

/// Client-held copy of which actions need which request-access parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    #[serde(rename = "urlParams", default)]
    pub url_params: HashMap<String, ParameterPayload>,
}

impl PermissionSnapshot {
    pub fn params_for(&self, key: &str) -> Option<&ParameterPayload> {
        self.url_params.get(key)
    }
}

/// Why no request-access action is available. Neither case is an error; the
/// page just omits the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAction {
    /// Permission matrix has not been loaded
    MissingSnapshot,
    /// No parameters for the normalized key (or no key at all)
    UnknownKey,
}

/// Find the parameter payload for `key` in the snapshot. A `null` entry
/// counts as no parameters.
pub fn lookup_params<'a>(
    snapshot: Option<&'a PermissionSnapshot>,
    key: Option<&str>,
) -> Result<&'a ParameterPayload, NoAction> {
    let snapshot = snapshot.ok_or(NoAction::MissingSnapshot)?;
    key.and_then(|key| snapshot.params_for(key))
        .filter(|params| !params.is_null())
        .ok_or(NoAction::UnknownKey)
}

/// Observable state of a resolution, as read by the render surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessUrlState {
    /// Resolved request-access URL, empty until the call succeeds
    pub url: String,
    /// True only while the authorization service call is in flight
    pub loading: bool,
    /// Set when the call failed
    pub failure: Option<String>,
}

impl AccessUrlState {
    /// Whether the request-access action has somewhere to go.
    pub fn can_open(&self) -> bool {
        !self.loading && !self.url.is_empty()
    }
}

/// Authorization service call that turns a parameter payload into a URL.
#[allow(async_fn_in_trait)]
pub trait AccessUrlService {
    async fn request_access_url(&self, params: &ParameterPayload) -> Result<String, ApiError>;
}

/// Wrap `publish` so states are only delivered while `alive` is set.
///
/// The owning view clears the flag on teardown; a call completing after
/// that must not write into its state.
pub fn publish_while_alive<'a, F>(
    alive: &'a RefCell<bool>,
    mut publish: F,
) -> impl FnMut(AccessUrlState) + 'a
where
    F: FnMut(AccessUrlState) + 'a,
{
    move |next| {
        if *alive.borrow() {
            publish(next);
        }
    }
}

/// Terminal outcome of [`resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    NoAction(NoAction),
    Resolved(String),
    Failed(ApiError),
}

/// Resolve the request-access URL for `key`.
///
/// `publish` sees every state change: nothing on a lookup miss, otherwise a
/// loading state before the single service call and one terminal state with
/// `loading == false` after it, whatever the outcome. An empty URL from the
/// service is a failure.
pub async fn resolve<S, F>(
    service: &S,
    key: Option<&str>,
    snapshot: Option<&PermissionSnapshot>,
    mut publish: F,
) -> Resolution
where
    S: AccessUrlService,
    F: FnMut(AccessUrlState),
{
    let params = match lookup_params(snapshot, key) {
        Ok(params) => params,
        Err(reason) => return Resolution::NoAction(reason),
    };

    publish(AccessUrlState {
        loading: true,
        ..Default::default()
    });

    let result = service
        .request_access_url(params)
        .await
        .and_then(|url| {
            if url.is_empty() {
                Err(ApiError::Parse("empty access URL".to_string()))
            } else {
                Ok(url)
            }
        });

    match result {
        Ok(url) => {
            publish(AccessUrlState {
                url: url.clone(),
                ..Default::default()
            });
            Resolution::Resolved(url)
        }
        Err(e) => {
            publish(AccessUrlState {
                failure: Some(e.to_string()),
                ..Default::default()
            });
            Resolution::Failed(e)
        }
    }
}
