//! Dialog facade.
//!
//! Four short calls cover every pop-up the site shows:
//!
//! * [`Prompt::toast`]   – transient banner that closes by itself
//! * [`Prompt::success`] – blocking modal with a success icon
//! * [`Prompt::error`]   – blocking modal with an error icon
//! * [`Prompt::custom`]  – blocking modal with arbitrary HTML, a cancel button
//!   and an optional confirm button, resolved through a callback
//!
//! A `Prompt` is created once per page (see [`Prompt::from_window`]) and
//! cloned freely; it only holds the `Document` it renders into.

pub mod countdown;
pub mod modal;
mod styles;
pub mod toast;

use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{END_INPUT_ID, START_INPUT_ID};
use crate::dom_utils;

pub use modal::{DismissReason, ModalOutcome};

/// Hook run against the dialog's popup element at a lifecycle point.
pub type Hook = Box<dyn FnOnce(&Element)>;
/// Computes the confirm value from the popup at the moment of confirmation.
pub type PreConfirm = Box<dyn Fn(&Element) -> Value>;
/// Receives `None` (nothing selected) or `Some(value)` once a custom dialog closes.
pub type ResultCallback = Box<dyn FnOnce(Option<Value>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconKind {
    #[default]
    None,
    Success,
    Error,
    Warning,
    Info,
    Question,
}

impl IconKind {
    /// Parse the library-style icon name; `""` means no icon.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "" => Some(IconKind::None),
            "success" => Some(IconKind::Success),
            "error" => Some(IconKind::Error),
            "warning" => Some(IconKind::Warning),
            "info" => Some(IconKind::Info),
            "question" => Some(IconKind::Question),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::None => "",
            IconKind::Success => "success",
            IconKind::Error => "error",
            IconKind::Warning => "warning",
            IconKind::Info => "info",
            IconKind::Question => "question",
        }
    }

    /// Symbol drawn inside the round icon badge; `None` draws no badge.
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            IconKind::None => None,
            IconKind::Success => Some("\u{2713}"),
            IconKind::Error => Some("\u{2715}"),
            IconKind::Warning => Some("!"),
            IconKind::Info => Some("i"),
            IconKind::Question => Some("?"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    Top,
    TopStart,
    #[default]
    TopEnd,
    Center,
    Bottom,
    BottomStart,
    BottomEnd,
}

impl Position {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Position::Top),
            "top-start" => Some(Position::TopStart),
            "top-end" => Some(Position::TopEnd),
            "center" => Some(Position::Center),
            "bottom" => Some(Position::Bottom),
            "bottom-start" => Some(Position::BottomStart),
            "bottom-end" => Some(Position::BottomEnd),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::TopStart => "top-start",
            Position::TopEnd => "top-end",
            Position::Center => "center",
            Position::Bottom => "bottom",
            Position::BottomStart => "bottom-start",
            Position::BottomEnd => "bottom-end",
        }
    }
}

/// Options for [`Prompt::toast`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    pub msg: String,
    pub icon: IconKind,
    pub position: Position,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            msg: String::new(),
            icon: IconKind::Success,
            position: Position::TopEnd,
        }
    }
}

impl ToastOptions {
    pub fn new(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: IconKind) -> Self {
        self.icon = icon;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// Options for [`Prompt::success`] and [`Prompt::error`]. Every field
/// defaults to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertOptions {
    pub msg: String,
    pub title: String,
    pub footer: String,
}

impl AlertOptions {
    pub fn new(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn footer(mut self, footer: &str) -> Self {
        self.footer = footer.to_string();
        self
    }
}

/// Options for [`Prompt::custom`].
///
/// `msg` is inserted as HTML. The confirm button is shown unless
/// `show_confirm_button` is cleared. Without a `pre_confirm`, confirming
/// yields `["<start>", "<end>"]` read from the dialog's `start`/`end` inputs.
pub struct CustomOptions {
    pub icon: IconKind,
    pub msg: String,
    pub title: String,
    pub show_confirm_button: bool,
    pub will_open: Option<Hook>,
    pub did_open: Option<Hook>,
    pub pre_confirm: Option<PreConfirm>,
    pub callback: Option<ResultCallback>,
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self {
            icon: IconKind::None,
            msg: String::new(),
            title: String::new(),
            show_confirm_button: true,
            will_open: None,
            did_open: None,
            pre_confirm: None,
            callback: None,
        }
    }
}

impl CustomOptions {
    pub fn new(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: IconKind) -> Self {
        self.icon = icon;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn show_confirm_button(mut self, show: bool) -> Self {
        self.show_confirm_button = show;
        self
    }

    pub fn will_open(mut self, hook: impl FnOnce(&Element) + 'static) -> Self {
        self.will_open = Some(Box::new(hook));
        self
    }

    pub fn did_open(mut self, hook: impl FnOnce(&Element) + 'static) -> Self {
        self.did_open = Some(Box::new(hook));
        self
    }

    pub fn pre_confirm(mut self, reader: impl Fn(&Element) -> Value + 'static) -> Self {
        self.pre_confirm = Some(Box::new(reader));
        self
    }

    pub fn callback(mut self, callback: impl FnOnce(Option<Value>) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

/// Default confirm value of a custom dialog: the `[start, end]` pair.
pub fn read_date_range(popup: &Element) -> Value {
    Value::Array(vec![
        Value::String(dom_utils::input_value_in(popup, START_INPUT_ID)),
        Value::String(dom_utils::input_value_in(popup, END_INPUT_ID)),
    ])
}

/// Collapse a modal outcome into what a custom dialog's callback receives.
///
/// Any dismissal and a confirmation whose value is the empty string both
/// become `None`; callers cannot tell the two apart.
pub fn settle(outcome: ModalOutcome) -> Option<Value> {
    match outcome {
        ModalOutcome::Dismissed(_) => None,
        ModalOutcome::Confirmed(Value::String(s)) if s.is_empty() => None,
        ModalOutcome::Confirmed(value) => Some(value),
    }
}

#[derive(Debug, Clone)]
pub struct Prompt {
    document: Document,
}

impl Prompt {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Prompt rendering into the current window's document.
    pub fn from_window() -> Result<Self, JsValue> {
        Ok(Self::new(dom_utils::document()?))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Show a toast. Returns as soon as it is on screen.
    pub fn toast(&self, options: ToastOptions) -> Result<(), JsValue> {
        toast::show(&self.document, &options)
    }

    /// Show a success modal and wait until it is dismissed.
    pub async fn success(&self, options: AlertOptions) -> Result<(), JsValue> {
        self.alert(IconKind::Success, options).await
    }

    /// Show an error modal and wait until it is dismissed.
    pub async fn error(&self, options: AlertOptions) -> Result<(), JsValue> {
        self.alert(IconKind::Error, options).await
    }

    async fn alert(&self, icon: IconKind, options: AlertOptions) -> Result<(), JsValue> {
        let spec = modal::ModalSpec {
            icon,
            title: options.title,
            body: modal::ModalBody::Text(options.msg),
            footer: options.footer,
            show_confirm: true,
            show_cancel: false,
            focus_confirm: true,
            backdrop: true,
        };
        modal::open(&self.document, spec, modal::ModalHooks::default()).await?;
        Ok(())
    }

    /// Show a custom modal and wait for the user. The settled result goes to
    /// `options.callback` (when set) and is also returned.
    pub async fn custom(&self, options: CustomOptions) -> Result<Option<Value>, JsValue> {
        let CustomOptions {
            icon,
            msg,
            title,
            show_confirm_button,
            will_open,
            did_open,
            pre_confirm,
            callback,
        } = options;

        let spec = modal::ModalSpec {
            icon,
            title,
            body: modal::ModalBody::Html(msg),
            footer: String::new(),
            show_confirm: show_confirm_button,
            show_cancel: true,
            focus_confirm: false,
            backdrop: false,
        };
        let hooks = modal::ModalHooks {
            will_open,
            did_open,
            pre_confirm: Some(pre_confirm.unwrap_or_else(|| Box::new(read_date_range))),
        };

        let outcome = modal::open(&self.document, spec, hooks).await?;
        let selection = settle(outcome);
        if let Some(callback) = callback {
            callback(selection.clone());
        }
        Ok(selection)
    }
}
