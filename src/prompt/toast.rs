//! Toast / notification rendering.
//!
//! One `#attention-toast-root-{position}` container per screen position;
//! toasts are prepended so the newest sits on top. Each toast closes after
//! [`TOAST_TIMER_MS`] of un-hovered time: `mouseenter` pauses the countdown
//! and the progress bar, `mouseleave` picks up where it stopped.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

use super::countdown::Countdown;
use super::{styles, Position, ToastOptions};
use crate::constants::TOAST_TIMER_MS;
use crate::{dom_utils, utils};

thread_local! {
    // Toasts still on screen. Closing a toast drops its entry, and with it
    // every closure the toast registered.
    static LIVE_TOASTS: RefCell<HashMap<u32, Rc<RefCell<ToastTimer>>>> =
        RefCell::new(HashMap::new());
}

struct ToastTimer {
    element: Element,
    countdown: Countdown,
    handle: Option<i32>,
    on_expire: Closure<dyn FnMut()>,
    _listeners: Vec<Closure<dyn FnMut(Event)>>,
}

/// Number of toasts currently on screen.
pub fn live_count() -> usize {
    LIVE_TOASTS.with(|live| live.borrow().len())
}

pub(crate) fn show(document: &Document, options: &ToastOptions) -> Result<(), JsValue> {
    styles::ensure(document)?;
    let root = ensure_root(document, options.position)?;

    let toast = document.create_element("div")?;
    toast.set_class_name("attention-toast");
    toast.set_attribute("role", "status")?;

    if let Some(glyph) = options.icon.glyph() {
        let icon = document.create_element("div")?;
        icon.set_class_name(&format!(
            "attention-icon attention-icon--{}",
            options.icon.as_str()
        ));
        icon.set_text_content(Some(glyph));
        toast.append_child(&icon)?;
    }

    let title = document.create_element("div")?;
    title.set_class_name("attention-title");
    title.set_text_content(Some(&options.msg));
    toast.append_child(&title)?;

    let progress = document.create_element("div")?;
    progress.set_class_name("attention-toast-progress");
    progress.set_attribute("style", &format!("animation-duration:{}ms", TOAST_TIMER_MS))?;
    toast.append_child(&progress)?;

    let id = utils::next_sequence();
    let on_enter = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| pause(id)));
    toast.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
    let on_leave = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_e: Event| {
        if let Err(e) = resume(id) {
            crate::console_warn!("toast: could not resume timer: {:?}", e);
        }
    }));
    toast.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;

    root.prepend_with_node_1(&toast)?;

    let timer = Rc::new(RefCell::new(ToastTimer {
        element: toast.clone(),
        countdown: Countdown::start(f64::from(TOAST_TIMER_MS), utils::now_ms()),
        handle: None,
        on_expire: Closure::<dyn FnMut()>::wrap(Box::new(move || expire(id))),
        _listeners: vec![on_enter, on_leave],
    }));
    LIVE_TOASTS.with(|live| live.borrow_mut().insert(id, timer.clone()));

    if let Err(e) = schedule_removal(&timer) {
        LIVE_TOASTS.with(|live| live.borrow_mut().remove(&id));
        toast.remove();
        return Err(e);
    }
    Ok(())
}

fn ensure_root(document: &Document, position: Position) -> Result<Element, JsValue> {
    let id = format!("attention-toast-root-{}", position.as_str());
    if let Some(el) = document.get_element_by_id(&id) {
        return Ok(el);
    }

    let root = document.create_element("div")?;
    root.set_id(&id);
    root.set_class_name(&format!(
        "attention-toast-root attention-toast-root--{}",
        position.as_str()
    ));
    dom_utils::body(document)?.append_child(&root)?;
    Ok(root)
}

fn live(id: u32) -> Option<Rc<RefCell<ToastTimer>>> {
    LIVE_TOASTS.with(|live| live.borrow().get(&id).cloned())
}

fn schedule_removal(timer: &Rc<RefCell<ToastTimer>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let handle = {
        let t = timer.borrow();
        let remaining = t.countdown.remaining(utils::now_ms());
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            t.on_expire.as_ref().unchecked_ref(),
            remaining.ceil() as i32,
        )?
    };
    timer.borrow_mut().handle = Some(handle);
    Ok(())
}

fn expire(id: u32) {
    let Some(timer) = LIVE_TOASTS.with(|live| live.borrow_mut().remove(&id)) else {
        return;
    };
    timer.borrow().element.remove();
    // `on_expire` is the closure running right now; release it once this
    // callback has returned.
    spawn_local(async move { drop(timer) });
}

fn pause(id: u32) {
    let Some(timer) = live(id) else { return };
    let mut t = timer.borrow_mut();
    if !t.countdown.pause(utils::now_ms()) {
        return;
    }
    if let (Some(handle), Some(window)) = (t.handle.take(), web_sys::window()) {
        window.clear_timeout_with_handle(handle);
    }
    let _ = t.element.class_list().add_1("is-paused");
}

fn resume(id: u32) -> Result<(), JsValue> {
    let Some(timer) = live(id) else { return Ok(()) };
    {
        let mut t = timer.borrow_mut();
        if !t.countdown.resume(utils::now_ms()) {
            return Ok(());
        }
        let _ = t.element.class_list().remove_1("is-paused");
    }
    schedule_removal(&timer)
}
