//! Date-range picker for the availability form.
//!
//! Room pages load vanillajs-datepicker, which exposes a `DateRangePicker`
//! global; when it is there we hand it the dates container. When it is not,
//! the two inputs become native `<input type="date">` controls with the same
//! constraints (today as minimum, end never before start, picker on focus).

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::constants::{DATE_FORMAT, END_INPUT_ID, RESERVATION_DATES_ID, START_INPUT_ID};
use crate::{dom_utils, utils};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = DateRangePicker)]
    pub type JsDateRangePicker;

    #[wasm_bindgen(constructor, catch)]
    fn new(element: &Element, options: &JsValue) -> Result<JsDateRangePicker, JsValue>;
}

/// Options passed verbatim to `new DateRangePicker(el, options)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOptions {
    pub format: String,
    pub show_on_focus: bool,
    pub min_date: String,
}

impl PickerOptions {
    /// `yyyy-mm-dd`, opening on focus, nothing before today.
    pub fn from_today() -> Self {
        Self::with_min_date(&utils::today_iso())
    }

    pub fn with_min_date(min_date: &str) -> Self {
        Self {
            format: DATE_FORMAT.to_string(),
            show_on_focus: true,
            min_date: min_date.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Widget,
    Native,
}

/// A picker bound to one dialog. Keep it alive for as long as the dialog is
/// open; dropping it releases the native-input listeners.
pub struct AttachedPicker {
    kind: PickerKind,
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl AttachedPicker {
    pub fn kind(&self) -> PickerKind {
        self.kind
    }
}

/// Attach a picker to the `#reservation-dates-modal` container inside
/// `popup`. Returns `None` when the container is not there.
pub fn attach(popup: &Element, options: &PickerOptions) -> Result<Option<AttachedPicker>, JsValue> {
    let Some(container) = popup.query_selector(&format!("#{}", RESERVATION_DATES_ID))? else {
        return Ok(None);
    };

    if widget_available()? {
        let js_options = serde_wasm_bindgen::to_value(options)?;
        JsDateRangePicker::new(&container, &js_options)?;
        return Ok(Some(AttachedPicker {
            kind: PickerKind::Widget,
            _listeners: Vec::new(),
        }));
    }

    crate::console_debug!("datepicker: DateRangePicker not loaded, using native date inputs");
    let listeners = attach_native(&container, options)?;
    Ok(Some(AttachedPicker {
        kind: PickerKind::Native,
        _listeners: listeners,
    }))
}

fn widget_available() -> Result<bool, JsValue> {
    let ctor = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("DateRangePicker"))?;
    Ok(ctor.is_function())
}

fn attach_native(
    container: &Element,
    options: &PickerOptions,
) -> Result<Vec<Closure<dyn FnMut(Event)>>, JsValue> {
    let (Some(start), Some(end)) = (
        dom_utils::input_in(container, START_INPUT_ID),
        dom_utils::input_in(container, END_INPUT_ID),
    ) else {
        return Ok(Vec::new());
    };

    let mut listeners = Vec::new();
    for input in [&start, &end] {
        input.set_type("date");
        input.set_min(&options.min_date);
        if options.show_on_focus {
            listeners.push(open_on_focus(input)?);
        }
    }

    let min_date = options.min_date.clone();
    let end_for_start = end.clone();
    let on_start_change = Closure::<dyn FnMut(_)>::wrap(Box::new(move |e: Event| {
        let start_value = start_value_of(&e);
        let floor = later_date(&min_date, &start_value);
        end_for_start.set_min(&floor);
        if !end_for_start.value().is_empty() && end_for_start.value() < floor {
            end_for_start.set_value(&floor);
        }
    }));
    start.add_event_listener_with_callback("change", on_start_change.as_ref().unchecked_ref())?;
    listeners.push(on_start_change);

    Ok(listeners)
}

fn start_value_of(e: &Event) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default()
}

fn open_on_focus(input: &HtmlInputElement) -> Result<Closure<dyn FnMut(Event)>, JsValue> {
    let target = input.clone();
    let on_focus = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        // showPicker is missing on older engines and throws without a user
        // gesture; either way the input still accepts typing.
        if let Ok(show) = js_sys::Reflect::get(&target, &JsValue::from_str("showPicker")) {
            if let Some(show) = show.dyn_ref::<js_sys::Function>() {
                let _ = show.call0(&target);
            }
        }
    }));
    input.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref())?;
    Ok(on_focus)
}

/// The later of two `yyyy-mm-dd` dates; an empty string loses.
pub fn later_date(a: &str, b: &str) -> String {
    if b > a {
        b.to_string()
    } else {
        a.to_string()
    }
}
