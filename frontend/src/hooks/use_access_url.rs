//! Hook resolving the request-access URL for a denied route.

use crate::access_client::HttpAccessUrlService;
use shared::protocol::ACCESS_URL_TARGET;
use shared::{
    normalize_route_key, publish_while_alive, resolve, AccessUrlState, PermissionSnapshot,
    Resolution,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Return value from the use_access_url hook.
pub struct UseAccessUrl {
    /// Resolved URL, loading flag and failure notice
    pub state: AccessUrlState,
    /// Open the resolved URL in a new browsing context
    pub open: Callback<()>,
}

/// Hook for resolving the request-access URL of a denied route.
///
/// Normalizes `route_id` to a permission matrix key and, if the snapshot has
/// parameters for it, asks the authorization service for a URL. Runs once on
/// mount. Results arriving after the page unmounts are dropped.
///
/// # Example
/// ```ignore
/// let access = use_access_url(props.id.clone(), store.snapshot.clone());
/// let disabled = !access.state.can_open();
/// ```
#[hook]
pub fn use_access_url(
    route_id: Option<String>,
    snapshot: Option<Rc<PermissionSnapshot>>,
) -> UseAccessUrl {
    let state = use_state(AccessUrlState::default);
    let alive = use_mut_ref(|| true);

    {
        let state = state.clone();
        let alive = alive.clone();
        use_effect_with((), move |_| {
            let key = route_id.as_deref().map(normalize_route_key).map(str::to_owned);

            {
                let alive = alive.clone();
                spawn_local(async move {
                    let service = HttpAccessUrlService::from_location();
                    let publish = publish_while_alive(&alive, |next| state.set(next));

                    match resolve(&service, key.as_deref(), snapshot.as_deref(), publish).await {
                        Resolution::NoAction(reason) => {
                            log::debug!("No access request action for {:?}: {:?}", key, reason);
                        }
                        Resolution::Resolved(url) => {
                            log::info!("Resolved access URL for {:?}: {}", key, url);
                        }
                        Resolution::Failed(e) => {
                            log::error!("Failed to resolve access URL for {:?}: {}", key, e);
                        }
                    }
                });
            }

            move || {
                *alive.borrow_mut() = false;
            }
        });
    }

    let open = {
        let state = state.clone();
        Callback::from(move |_| {
            if !state.can_open() {
                log::debug!("Access URL not available yet, ignoring open");
                return;
            }
            let window = gloo::utils::window();
            if let Err(e) = window.open_with_url_and_target(&state.url, ACCESS_URL_TARGET) {
                log::error!("Failed to open access URL: {:?}", e);
            }
        })
    };

    UseAccessUrl {
        state: (*state).clone(),
        open,
    }
}
