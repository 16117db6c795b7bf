//! "Check Availability" workflow for a single room page.
//!
//! Clicking the trigger opens the date dialog; a confirmed pair of dates is
//! posted to the availability search and the answer shown as a follow-up
//! dialog. Every click runs its own independent flow.

pub mod api;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{FormData, MouseEvent};

use crate::config::PageConfig;
use crate::constants::{
    CHECK_AVAILABILITY_FORM_HTML, CHOOSE_DATES_TITLE, END_INPUT_ID, NO_AVAILABILITY_MSG,
    START_INPUT_ID,
};
use crate::datepicker::{self, AttachedPicker, PickerOptions};
use crate::prompt::{AlertOptions, CustomOptions, IconKind, Prompt};
use crate::{dom_utils, utils};

pub use api::ApiClient;

/// Room and anti-forgery token a page binds the trigger with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomBinding {
    pub room_id: String,
    pub csrf_token: String,
}

impl RoomBinding {
    pub fn new(room_id: impl ToString, csrf_token: &str) -> Self {
        Self {
            room_id: room_id.to_string(),
            csrf_token: csrf_token.to_string(),
        }
    }
}

/// Form payload of `POST /search-availability-json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub start: String,
    pub end: String,
    pub csrf_token: String,
    pub room_id: String,
}

impl AvailabilityRequest {
    /// Build the payload from a custom dialog's confirm value. Anything but
    /// an array of at least two elements yields `None`; falsy slots become `""`.
    pub fn from_selection(selection: &Value, binding: &RoomBinding) -> Option<Self> {
        let items = selection.as_array()?;
        if items.len() < 2 {
            return None;
        }
        Some(Self {
            start: utils::form_text(&items[0]),
            end: utils::form_text(&items[1]),
            csrf_token: binding.csrf_token.clone(),
            room_id: binding.room_id.clone(),
        })
    }

    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("start", self.start.as_str()),
            ("end", self.end.as_str()),
            ("csrf_token", self.csrf_token.as_str()),
            ("room_id", self.room_id.as_str()),
        ]
    }

    pub fn to_form_data(&self) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        for (name, value) in self.fields() {
            form.append_with_str(name, value)?;
        }
        Ok(form)
    }
}

/// Body returned by the availability search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub ok: bool,
    #[serde(default, deserialize_with = "text")]
    pub message: String,
    #[serde(default, deserialize_with = "text")]
    pub room_id: String,
    #[serde(default, deserialize_with = "text")]
    pub start_date: String,
    #[serde(default, deserialize_with = "text")]
    pub end_date: String,
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Value::deserialize(deserializer).map(|v| utils::is_truthy(&v))
}

// The server sends ids as strings, older builds as numbers.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => utils::value_text(&other),
    })
}

impl AvailabilityResponse {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn booking_link(&self, config: &PageConfig) -> String {
        config.book_room_url(&self.room_id, &self.start_date, &self.end_date)
    }

    /// Body of the "room is available" dialog.
    pub fn available_html(&self, config: &PageConfig) -> String {
        format!(
            r#"<p>Room is available!</p><p><a href="{}" class="btn btn-primary">Book now!</a></p>"#,
            self.booking_link(config)
        )
    }
}

/// Wire the trigger button of the page to the availability workflow.
///
/// Returns `Ok(false)` without installing anything when the page has no
/// trigger; that is the normal case on pages other than room pages.
pub fn bind(prompt: &Prompt, config: &PageConfig, binding: RoomBinding) -> Result<bool, JsValue> {
    let Some(button) = prompt.document().get_element_by_id(config.trigger_id()) else {
        crate::console_debug!("availability: no #{} on this page", config.trigger_id());
        return Ok(false);
    };

    let prompt = prompt.clone();
    let config = config.clone();
    let on_click = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: MouseEvent| {
        let flow = check_availability(prompt.clone(), config.clone(), binding.clone());
        // A failed fetch or undecodable body rejects this promise and shows
        // up as an unhandled rejection, nothing more.
        let _ = future_to_promise(async move { flow.await.map(|_| JsValue::UNDEFINED) });
    }));
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(true)
}

/// One complete click: date dialog, search, follow-up dialog.
pub async fn check_availability(
    prompt: Prompt,
    config: PageConfig,
    binding: RoomBinding,
) -> Result<(), JsValue> {
    let picker: Rc<RefCell<Option<AttachedPicker>>> = Rc::new(RefCell::new(None));
    let attached = picker.clone();
    let options = CustomOptions::new(CHECK_AVAILABILITY_FORM_HTML)
        .title(CHOOSE_DATES_TITLE)
        .will_open(move |popup| match datepicker::attach(popup, &PickerOptions::from_today()) {
            Ok(p) => {
                *attached.borrow_mut() = p;
            }
            Err(e) => {
                crate::console_warn!("availability: could not attach date picker: {:?}", e);
            }
        })
        .did_open(|popup| dom_utils::enable_inputs(popup, &[START_INPUT_ID, END_INPUT_ID]));

    let selection = prompt.custom(options).await;
    picker.borrow_mut().take();
    let selection = selection?;
    let Some(request) = selection
        .as_ref()
        .and_then(|s| AvailabilityRequest::from_selection(s, &binding))
    else {
        return Ok(());
    };

    let response = ApiClient::search_availability(&config, &request).await?;
    show_result(&prompt, &config, &response).await
}

/// Follow-up dialog for a search answer.
pub async fn show_result(
    prompt: &Prompt,
    config: &PageConfig,
    response: &AvailabilityResponse,
) -> Result<(), JsValue> {
    if response.ok {
        let options = CustomOptions::new(&response.available_html(config))
            .icon(IconKind::Success)
            .show_confirm_button(false);
        prompt.custom(options).await?;
    } else {
        prompt.error(AlertOptions::new(NO_AVAILABILITY_MSG)).await?;
    }
    Ok(())
}
