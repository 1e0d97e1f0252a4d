//! Browser URL and history interop for shareable links.

use gloo_utils::{history, window};
use log::{debug, warn};
use pace_calculator::ShareState;
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

/// Read `distance`, `time` and `pace` from the current page query.
pub fn read_share_state() -> ShareState {
    let search = window().location().search().unwrap_or_default();
    match UrlSearchParams::new_with_str(&search) {
        Ok(params) => ShareState::from_lookup(|key| params.get(key)),
        Err(e) => {
            warn!("Could not read query parameters: {:?}", e);
            ShareState::default()
        }
    }
}

/// Replace the page query with `state` without reloading.
pub fn push_share_state(state: &ShareState) -> Result<(), JsValue> {
    let params = UrlSearchParams::new()?;
    for (key, value) in state.pairs() {
        params.append(key, value);
    }
    let query: js_sys::JsString = params.to_string();
    let url = format!("{}?{}", window().location().pathname()?, String::from(query));
    debug!("Pushing shareable URL {}", url);
    history().push_state_with_url(&JsValue::NULL, "", Some(&url))
}
