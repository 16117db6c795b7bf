use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

#[macro_use]
mod macros;

pub mod availability;
pub mod config;
pub mod constants;
pub mod datepicker;
pub mod dom_utils;
pub mod prompt;
pub mod utils;

use availability::RoomBinding;
use config::PageConfig;
use prompt::{AlertOptions, IconKind, Position, Prompt, ToastOptions};

// Entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
    Ok(())
}

/// Wire the "Check Availability" button of a room page.
///
/// `room_id` may be a number or a string; it is sent in its string form.
/// Returns `false` when the page has no trigger button.
#[wasm_bindgen]
pub fn init_room_check_availability(room_id: JsValue, csrf_token: String) -> Result<bool, JsValue> {
    let prompt = Prompt::from_window()?;
    let binding = RoomBinding::new(utils::js_to_string(&room_id), &csrf_token);
    availability::bind(&prompt, &PageConfig::new(), binding)
}

/// Page-script handle on the dialog facade, e.g. for flash messages rendered
/// by the server templates:
///
/// ```js
/// const attention = new Attention();
/// attention.toast("Reservation saved", "success", "top-end");
/// attention.error("Can't get reservation from session", "Oops", "");
/// ```
#[wasm_bindgen]
pub struct Attention {
    prompt: Prompt,
}

#[wasm_bindgen]
impl Attention {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Attention, JsValue> {
        Ok(Self {
            prompt: Prompt::from_window()?,
        })
    }

    /// Unknown icon or position names fall back to the toast defaults.
    pub fn toast(&self, msg: &str, icon: Option<String>, position: Option<String>) -> Result<(), JsValue> {
        let defaults = ToastOptions::default();
        let options = ToastOptions::new(msg)
            .icon(icon.as_deref().and_then(IconKind::from_name).unwrap_or(defaults.icon))
            .position(
                position
                    .as_deref()
                    .and_then(Position::from_name)
                    .unwrap_or(defaults.position),
            );
        self.prompt.toast(options)
    }

    /// Resolves once the dialog is dismissed.
    pub fn success(&self, msg: &str, title: Option<String>, footer: Option<String>) -> js_sys::Promise {
        let prompt = self.prompt.clone();
        let options = alert_options(msg, title, footer);
        future_to_promise(async move {
            prompt.success(options).await?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Resolves once the dialog is dismissed.
    pub fn error(&self, msg: &str, title: Option<String>, footer: Option<String>) -> js_sys::Promise {
        let prompt = self.prompt.clone();
        let options = alert_options(msg, title, footer);
        future_to_promise(async move {
            prompt.error(options).await?;
            Ok(JsValue::UNDEFINED)
        })
    }
}

fn alert_options(msg: &str, title: Option<String>, footer: Option<String>) -> AlertOptions {
    AlertOptions {
        msg: msg.to_string(),
        title: title.unwrap_or_default(),
        footer: footer.unwrap_or_default(),
    }
}
