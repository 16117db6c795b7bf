//! Modal dialog rendering and resolution.
//!
//! `open` builds a fresh `<div class="attention-container">` per call, runs
//! the lifecycle hooks, and suspends until a button, `Escape` or an outside
//! click settles it. The DOM is removed and focus restored before returning,
//! so several dialogs may be open at once without sharing anything.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise};
use serde_json::Value;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use super::{styles, Hook, IconKind, PreConfirm};
use crate::constants::{CANCEL_BUTTON_TEXT, CONFIRM_BUTTON_TEXT};
use crate::{dom_utils, utils};

/// How the user left a modal without confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Cancel,
    Close,
    Esc,
    Backdrop,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalOutcome {
    Confirmed(Value),
    Dismissed(DismissReason),
}

pub(crate) enum ModalBody {
    Text(String),
    Html(String),
}

pub(crate) struct ModalSpec {
    pub icon: IconKind,
    pub title: String,
    pub body: ModalBody,
    pub footer: String,
    pub show_confirm: bool,
    pub show_cancel: bool,
    pub focus_confirm: bool,
    pub backdrop: bool,
}

#[derive(Default)]
pub(crate) struct ModalHooks {
    pub will_open: Option<Hook>,
    pub did_open: Option<Hook>,
    pub pre_confirm: Option<PreConfirm>,
}

struct Parts {
    container: Element,
    popup: Element,
    close: Element,
    confirm: Option<Element>,
    cancel: Option<Element>,
}

type Listener = Closure<dyn FnMut(Event)>;

pub(crate) async fn open(
    document: &Document,
    spec: ModalSpec,
    hooks: ModalHooks,
) -> Result<ModalOutcome, JsValue> {
    styles::ensure(document)?;
    let previous_focus = dom_utils::store_active_element(document);

    let id = format!("attention-modal-{}", utils::next_sequence());
    let parts = build(document, &id, &spec)?;
    let ModalHooks {
        will_open,
        did_open,
        pre_confirm,
    } = hooks;

    // Only the first settlement counts; the promise itself resolves with
    // `undefined` and the outcome stays on the Rust side.
    let outcome: Rc<RefCell<Option<ModalOutcome>>> = Rc::new(RefCell::new(None));
    let resolver: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));
    let promise = Promise::new(&mut |resolve, _reject| {
        *resolver.borrow_mut() = Some(resolve);
    });
    let settle: Rc<dyn Fn(ModalOutcome)> = {
        let outcome = outcome.clone();
        let resolver = resolver.clone();
        Rc::new(move |settled: ModalOutcome| {
            let Some(resolve) = resolver.borrow_mut().take() else {
                return;
            };
            *outcome.borrow_mut() = Some(settled);
            let _ = resolve.call0(&JsValue::NULL);
        })
    };

    // Listeners go on the detached dialog first so a wiring failure never
    // leaves an undismissable dialog on the page.
    let mut listeners: Vec<Listener> = Vec::new();

    if let Some(confirm) = &parts.confirm {
        let settle = settle.clone();
        let popup = parts.popup.clone();
        let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
            let value = match &pre_confirm {
                Some(reader) => reader(&popup),
                None => Value::Bool(true),
            };
            settle(ModalOutcome::Confirmed(value));
        }));
        confirm.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        listeners.push(cb);
    }

    let dismissers = [
        (parts.cancel.as_ref(), DismissReason::Cancel),
        (Some(&parts.close), DismissReason::Close),
    ];
    for (button, reason) in dismissers {
        let Some(button) = button else { continue };
        let settle = settle.clone();
        let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
            settle(ModalOutcome::Dismissed(reason));
        }));
        button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        listeners.push(cb);
    }

    // Without a backdrop the container lets clicks through to the page, so
    // there is no "outside" to click on.
    if spec.backdrop {
        let settle = settle.clone();
        let container = parts.container.clone();
        let cb = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            let on_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|t| t == container)
                .unwrap_or(false);
            if on_backdrop {
                settle(ModalOutcome::Dismissed(DismissReason::Backdrop));
            }
        }));
        parts
            .container
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        listeners.push(cb);
    }

    let on_key: Listener = {
        let settle = settle.clone();
        let document = document.clone();
        let id = id.clone();
        Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            let is_escape = e
                .dyn_ref::<KeyboardEvent>()
                .map(|k| k.key() == "Escape")
                .unwrap_or(false);
            if is_escape && is_topmost(&document, &id) {
                settle(ModalOutcome::Dismissed(DismissReason::Esc));
            }
        }))
    };

    // Attached but still hidden: `will_open` can find the dialog's elements
    // through the document.
    dom_utils::body(document)?.append_child(&parts.container)?;
    if let Err(e) =
        document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
    {
        parts.container.remove();
        return Err(e);
    }

    if let Some(hook) = will_open {
        hook(&parts.popup);
    }
    dom_utils::show(&parts.container);
    if let Some(hook) = did_open {
        hook(&parts.popup);
    }

    let focused = match (&parts.confirm, spec.focus_confirm) {
        (Some(confirm), true) => confirm
            .dyn_ref::<HtmlElement>()
            .map(|el| el.focus().is_ok())
            .unwrap_or(false),
        _ => false,
    };
    if !focused {
        dom_utils::focus_first_interactive(&parts.popup);
    }

    let result = JsFuture::from(promise).await;

    let _ = document.remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    parts.container.remove();
    drop(listeners);
    drop(on_key);
    dom_utils::restore_focus(previous_focus);

    result?;
    let settled = outcome.borrow_mut().take();
    settled.ok_or_else(|| JsValue::from_str("modal closed without an outcome"))
}

/// `Escape` only closes the most recently opened dialog.
fn is_topmost(document: &Document, id: &str) -> bool {
    let Ok(open) = document.query_selector_all(".attention-container") else {
        return false;
    };
    let len = open.length();
    if len == 0 {
        return false;
    }
    open.item(len - 1)
        .and_then(|node| node.dyn_into::<Element>().ok())
        .map(|el| el.id() == id)
        .unwrap_or(false)
}

fn build(document: &Document, id: &str, spec: &ModalSpec) -> Result<Parts, JsValue> {
    let container = document.create_element("div")?;
    container.set_id(id);
    container.set_class_name(if spec.backdrop {
        "attention-container attention-backdrop-show"
    } else {
        "attention-container attention-no-backdrop"
    });
    dom_utils::hide(&container);

    let popup = document.create_element("div")?;
    popup.set_class_name("attention-popup");
    popup.set_attribute("role", "dialog")?;
    popup.set_attribute("aria-modal", "true")?;
    container.append_child(&popup)?;

    let close = button(document, "attention-close", "\u{00d7}")?;
    close.set_attribute("aria-label", "Close this dialog")?;
    popup.append_child(&close)?;

    if let Some(glyph) = spec.icon.glyph() {
        let icon = document.create_element("div")?;
        icon.set_class_name(&format!("attention-icon attention-icon--{}", spec.icon.as_str()));
        icon.set_text_content(Some(glyph));
        popup.append_child(&icon)?;
    }

    if !spec.title.is_empty() {
        let title = document.create_element("h2")?;
        title.set_class_name("attention-title");
        title.set_text_content(Some(&spec.title));
        popup.append_child(&title)?;
    }

    let body = document.create_element("div")?;
    body.set_class_name("attention-html-container");
    match &spec.body {
        ModalBody::Text(text) => body.set_text_content(Some(text)),
        ModalBody::Html(html) => body.set_inner_html(html),
    }
    popup.append_child(&body)?;

    let actions = document.create_element("div")?;
    actions.set_class_name("attention-actions");
    popup.append_child(&actions)?;

    let confirm = if spec.show_confirm {
        let el = button(document, "attention-confirm", CONFIRM_BUTTON_TEXT)?;
        actions.append_child(&el)?;
        Some(el)
    } else {
        None
    };
    let cancel = if spec.show_cancel {
        let el = button(document, "attention-cancel", CANCEL_BUTTON_TEXT)?;
        actions.append_child(&el)?;
        Some(el)
    } else {
        None
    };

    if !spec.footer.is_empty() {
        let footer = document.create_element("div")?;
        footer.set_class_name("attention-footer");
        footer.set_inner_html(&spec.footer);
        popup.append_child(&footer)?;
    }

    Ok(Parts {
        container,
        popup,
        close,
        confirm,
        cancel,
    })
}

fn button(document: &Document, class: &str, text: &str) -> Result<Element, JsValue> {
    let el = document.create_element("button")?;
    el.set_attribute("type", "button")?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    Ok(el)
}
