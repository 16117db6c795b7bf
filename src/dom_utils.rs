//! dom_utils.rs – thin helper layer for repetitive DOM operations used by the
//! dialogs and the availability form.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Remove the `hidden` modifier so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

/// The page's document, or an error when running outside a browser window.
pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document on window"))
}

/// `<body>` of the given document.
pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))
}

/// Look up an `<input>` by id inside `container` (not the whole page, so two
/// open dialogs never read each other's fields).
pub fn input_in(container: &Element, id: &str) -> Option<HtmlInputElement> {
    container
        .query_selector(&format!("#{}", id))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

/// Current value of an input inside `container`; a missing field reads as `""`.
pub fn input_value_in(container: &Element, id: &str) -> String {
    input_in(container, id).map(|i| i.value()).unwrap_or_default()
}

/// Drop the `disabled` attribute of every listed input found inside `container`.
pub fn enable_inputs(container: &Element, ids: &[&str]) {
    for id in ids {
        if let Some(input) = input_in(container, id) {
            let _ = input.remove_attribute("disabled");
        }
    }
}

// ---------------------------------------------------------------------------
// Focus management
// ---------------------------------------------------------------------------

const FOCUSABLE_SELECTORS: [&str; 6] = [
    "input:not([disabled])",
    "button:not([disabled])",
    "textarea:not([disabled])",
    "select:not([disabled])",
    "a[href]",
    "[tabindex]:not([tabindex='-1'])",
];

/// Focus the first interactive element within the given container.
/// Returns true if an element was focused, false otherwise.
pub fn focus_first_interactive(container: &Element) -> bool {
    for selector in &FOCUSABLE_SELECTORS {
        if let Ok(Some(element)) = container.query_selector(selector) {
            if let Ok(html_element) = element.dyn_into::<HtmlElement>() {
                let _ = html_element.focus();
                return true;
            }
        }
    }
    false
}

/// Store the currently focused element for later restoration.
pub fn store_active_element(document: &Document) -> Option<HtmlElement> {
    document
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Restore focus to a previously stored element.
pub fn restore_focus(element: Option<HtmlElement>) {
    if let Some(el) = element {
        let _ = el.focus();
    }
}

/// Make sure a `<style id="{id}">` with `css` exists in `<head>` (or
/// `<body>` when the page has no head).
pub fn ensure_style(document: &Document, id: &str, css: &str) -> Result<(), JsValue> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => body(document)?.append_child(&style)?,
    };
    Ok(())
}
