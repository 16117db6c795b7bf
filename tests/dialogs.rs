//! Browser tests for the dialog facade.
//!
//! Run with: wasm-pack test --headless --firefox

use std::cell::RefCell;
use std::rc::Rc;

use attention::prompt::{toast, AlertOptions, CustomOptions, IconKind, Prompt, ToastOptions};
use gloo_timers::future::TimeoutFuture;
use serde_json::{json, Value};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn dialogs() -> Vec<Element> {
    let list = document().query_selector_all(".attention-container").unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|n| n.dyn_into::<Element>().unwrap())
        .collect()
}

fn click(container: &Element, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{} not in dialog", selector))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

async fn tick() {
    TimeoutFuture::new(0).await;
}

/// Run `custom` in the background and expose what it settles to.
fn spawn_custom(options: CustomOptions) -> Rc<RefCell<Option<Option<Value>>>> {
    let slot = Rc::new(RefCell::new(None));
    let out = slot.clone();
    let prompt = Prompt::new(document());
    spawn_local(async move {
        let selection = prompt.custom(options).await.expect("custom dialog failed");
        *out.borrow_mut() = Some(selection);
    });
    slot
}

const FORM: &str = r#"<input id="start" name="start"><input id="end" name="end">"#;

#[wasm_bindgen_test]
async fn toast_closes_after_three_seconds() {
    let prompt = Prompt::new(document());
    prompt.toast(ToastOptions::new("Saved").icon(IconKind::Error)).unwrap();

    let root = document().get_element_by_id("attention-toast-root-top-end").unwrap();
    let toast = root.first_element_child().unwrap();
    assert_eq!(toast.query_selector(".attention-title").unwrap().unwrap().text_content().unwrap(), "Saved");
    assert!(toast.query_selector(".attention-icon--error").unwrap().is_some());
    assert!(toast.query_selector(".attention-toast-progress").unwrap().is_some());

    TimeoutFuture::new(2_500).await;
    assert!(toast.is_connected(), "toast closed early");
    TimeoutFuture::new(800).await;
    assert!(!toast.is_connected(), "toast still open after its timer");
}

#[wasm_bindgen_test]
async fn hovering_suspends_the_toast_timer() {
    let prompt = Prompt::new(document());
    prompt.toast(ToastOptions::new("Hover me")).unwrap();
    let toast = document()
        .get_element_by_id("attention-toast-root-top-end")
        .unwrap()
        .first_element_child()
        .unwrap();

    TimeoutFuture::new(500).await;
    toast.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert!(toast.class_list().contains("is-paused"));

    TimeoutFuture::new(3_500).await;
    assert!(toast.is_connected(), "paused toast must stay");

    toast.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    TimeoutFuture::new(2_000).await;
    assert!(toast.is_connected(), "remaining time restarted too early");
    TimeoutFuture::new(1_000).await;
    assert!(!toast.is_connected());
}

#[wasm_bindgen_test]
async fn cancel_yields_none_and_calls_back() {
    let called_with = Rc::new(RefCell::new(None));
    let seen = called_with.clone();
    let before = dialogs().len();

    let result = spawn_custom(
        CustomOptions::new(FORM).callback(move |selection| *seen.borrow_mut() = Some(selection)),
    );
    tick().await;

    let open = dialogs();
    assert_eq!(open.len(), before + 1);
    click(open.last().unwrap(), ".attention-cancel");
    tick().await;

    assert_eq!(*result.borrow(), Some(None));
    assert_eq!(*called_with.borrow(), Some(None));
    assert_eq!(dialogs().len(), before);
}

#[wasm_bindgen_test]
async fn empty_confirmation_looks_like_cancel() {
    let result = spawn_custom(CustomOptions::new("<p>pick</p>").pre_confirm(|_| json!("")));
    tick().await;

    click(dialogs().last().unwrap(), ".attention-confirm");
    tick().await;

    assert_eq!(*result.borrow(), Some(None));
}

#[wasm_bindgen_test]
async fn escape_dismisses_only_the_top_dialog() {
    let first = spawn_custom(CustomOptions::new(FORM));
    let second = spawn_custom(CustomOptions::new(FORM));
    tick().await;

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&escape).unwrap();
    tick().await;

    assert_eq!(*second.borrow(), Some(None));
    assert!(first.borrow().is_none(), "lower dialog must stay open");

    click(dialogs().last().unwrap(), ".attention-cancel");
    tick().await;
    assert_eq!(*first.borrow(), Some(None));
}

#[wasm_bindgen_test]
async fn confirm_reads_dates_from_its_own_dialog() {
    let first = spawn_custom(CustomOptions::new(FORM));
    let second = spawn_custom(CustomOptions::new(FORM));
    tick().await;

    let open = dialogs();
    let (a, b) = (&open[open.len() - 2], &open[open.len() - 1]);
    for (dialog, start, end) in [(a, "2024-05-01", "2024-05-03"), (b, "2024-06-10", "2024-06-12")] {
        let input = |id: &str| {
            dialog
                .query_selector(&format!("#{}", id))
                .unwrap()
                .unwrap()
                .dyn_into::<HtmlInputElement>()
                .unwrap()
        };
        input("start").set_value(start);
        input("end").set_value(end);
    }

    click(a, ".attention-confirm");
    tick().await;
    assert_eq!(*first.borrow(), Some(Some(json!(["2024-05-01", "2024-05-03"]))));

    click(b, ".attention-confirm");
    tick().await;
    assert_eq!(*second.borrow(), Some(Some(json!(["2024-06-10", "2024-06-12"]))));
}

#[wasm_bindgen_test]
async fn hooks_run_before_and_after_attachment() {
    // (hook, popup attached, container hidden)
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (before, after) = (seen.clone(), seen.clone());
    let state = |popup: &Element| {
        let hidden = popup
            .closest(".attention-container")
            .unwrap()
            .map(|c| c.class_list().contains("hidden"))
            .unwrap_or(false);
        (popup.is_connected(), hidden)
    };

    let result = spawn_custom(
        CustomOptions::new(FORM)
            .will_open(move |popup| {
                let (attached, hidden) = state(popup);
                before.borrow_mut().push(("will_open", attached, hidden));
            })
            .did_open(move |popup| {
                let (attached, hidden) = state(popup);
                after.borrow_mut().push(("did_open", attached, hidden));
            }),
    );
    tick().await;

    assert_eq!(
        *seen.borrow(),
        vec![("will_open", true, true), ("did_open", true, false)]
    );

    click(dialogs().last().unwrap(), ".attention-close");
    tick().await;
    assert_eq!(*result.borrow(), Some(None));
}

#[wasm_bindgen_test]
async fn custom_dialog_ignores_clicks_outside_the_popup() {
    let result = spawn_custom(CustomOptions::new(FORM));
    tick().await;

    let dialog = dialogs().last().unwrap().clone();
    assert!(dialog.class_list().contains("attention-no-backdrop"));
    assert!(!dialog.class_list().contains("attention-backdrop-show"));

    dialog.dyn_ref::<HtmlElement>().unwrap().click();
    tick().await;
    assert!(dialog.is_connected(), "outside click closed the dialog");
    assert_eq!(*result.borrow(), None);

    click(&dialog, ".attention-cancel");
    tick().await;
    assert_eq!(*result.borrow(), Some(None));
}

#[wasm_bindgen_test]
async fn alert_closes_on_backdrop_click() {
    let done = Rc::new(RefCell::new(false));
    let flag = done.clone();
    let prompt = Prompt::new(document());
    spawn_local(async move {
        prompt.error(AlertOptions::new("Nope")).await.unwrap();
        *flag.borrow_mut() = true;
    });
    tick().await;

    let dialog = dialogs().last().unwrap().clone();
    assert!(dialog.class_list().contains("attention-backdrop-show"));
    dialog.dyn_ref::<HtmlElement>().unwrap().click();
    tick().await;
    assert!(*done.borrow());
    assert!(!dialog.is_connected());
}

#[wasm_bindgen_test]
async fn closed_toasts_release_their_timers() {
    let before = toast::live_count();
    let prompt = Prompt::new(document());
    prompt.toast(ToastOptions::new("Short-lived")).unwrap();
    assert_eq!(toast::live_count(), before + 1);

    TimeoutFuture::new(3_300).await;
    assert_eq!(toast::live_count(), before);
}

#[wasm_bindgen_test]
async fn confirm_button_can_be_hidden() {
    let result = spawn_custom(CustomOptions::new("<p>done</p>").show_confirm_button(false));
    tick().await;

    let dialog = dialogs().last().unwrap().clone();
    assert!(dialog.query_selector(".attention-confirm").unwrap().is_none());
    assert!(dialog.query_selector(".attention-cancel").unwrap().is_some());

    click(&dialog, ".attention-cancel");
    tick().await;
    assert_eq!(*result.borrow(), Some(None));
}

#[wasm_bindgen_test]
async fn success_dialog_waits_for_dismissal() {
    let done = Rc::new(RefCell::new(false));
    let flag = done.clone();
    let prompt = Prompt::new(document());
    spawn_local(async move {
        prompt
            .success(AlertOptions::new("Booked").title("Thanks").footer("See you soon"))
            .await
            .unwrap();
        *flag.borrow_mut() = true;
    });
    tick().await;

    let dialog = dialogs().last().unwrap().clone();
    assert!(dialog.query_selector(".attention-icon--success").unwrap().is_some());
    assert!(dialog.query_selector(".attention-cancel").unwrap().is_none());
    assert_eq!(
        dialog.query_selector(".attention-title").unwrap().unwrap().text_content().unwrap(),
        "Thanks"
    );
    assert!(!*done.borrow());

    click(&dialog, ".attention-confirm");
    tick().await;
    assert!(*done.borrow());
}
