use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestCredentials, RequestInit, Response};

use super::{AvailabilityRequest, AvailabilityResponse};
use crate::config::PageConfig;

// Client for the room availability endpoint
pub struct ApiClient;

impl ApiClient {
    /// `POST` the date range to the JSON availability search and decode the
    /// answer. The status code is not inspected: whatever body comes back
    /// must decode as JSON or the call fails.
    pub async fn search_availability(
        config: &PageConfig,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityResponse, JsValue> {
        let form = request.to_form_data()?;
        let body = Self::post_form(&config.search_availability_url(), &form).await?;
        AvailabilityResponse::parse(&body)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse availability response: {}", e)))
    }

    // Helper to post form data with the page's cookies attached
    pub async fn post_form(url: &str, form: &FormData) -> Result<String, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_credentials(RequestCredentials::SameOrigin);
        opts.set_body(form.as_ref());

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            crate::console_debug!("{} answered {} {}", url, resp.status(), resp.status_text());
        }

        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}
