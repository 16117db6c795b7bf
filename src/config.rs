//! Page-level configuration: where the availability endpoints live and which
//! element triggers the check.

use crate::constants::{BOOK_ROOM_PATH, CHECK_AVAILABILITY_BUTTON_ID, SEARCH_AVAILABILITY_JSON_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    base_url: String,
    trigger_id: String,
}

impl Default for PageConfig {
    /// Same-origin relative paths and the stock `check-availability-button`
    /// trigger, which is what the server-rendered room pages expect.
    fn default() -> Self {
        Self {
            base_url: String::new(),
            trigger_id: CHECK_AVAILABILITY_BUTTON_ID.to_string(),
        }
    }
}

impl PageConfig {
    /// Build from the `ATTENTION_BASE_URL` build-time variable, falling back
    /// to same-origin paths when it is not set.
    pub fn new() -> Self {
        match option_env!("ATTENTION_BASE_URL") {
            Some(url) => Self::from_url(url),
            None => Self::default(),
        }
    }

    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn with_trigger_id(mut self, id: &str) -> Self {
        self.trigger_id = id.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn trigger_id(&self) -> &str {
        &self.trigger_id
    }

    /// Endpoint answering the JSON availability search.
    pub fn search_availability_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_AVAILABILITY_JSON_PATH)
    }

    /// Booking page link shown when the room is free. Values are inserted
    /// as the server echoed them.
    pub fn book_room_url(&self, room_id: &str, start: &str, end: &str) -> String {
        format!(
            "{}{}?id={}&s={}&e={}",
            self.base_url, BOOK_ROOM_PATH, room_id, start, end
        )
    }
}
