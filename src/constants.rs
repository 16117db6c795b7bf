// Element ids the room page and the availability form rely on
pub const CHECK_AVAILABILITY_BUTTON_ID: &str = "check-availability-button";
pub const RESERVATION_DATES_ID: &str = "reservation-dates-modal";
pub const START_INPUT_ID: &str = "start";
pub const END_INPUT_ID: &str = "end";

// Server routes
pub const SEARCH_AVAILABILITY_JSON_PATH: &str = "/search-availability-json";
pub const BOOK_ROOM_PATH: &str = "/book-room";

// Date-range picker
pub const DATE_FORMAT: &str = "yyyy-mm-dd";
pub const CHRONO_DATE_FORMAT: &str = "%Y-%m-%d";

// Toasts always close after this long, whatever the icon or position.
pub const TOAST_TIMER_MS: u32 = 3000;

// Dialog copy
pub const CHOOSE_DATES_TITLE: &str = "Choose your dates";
pub const NO_AVAILABILITY_MSG: &str = "No availability";
pub const CONFIRM_BUTTON_TEXT: &str = "OK";
pub const CANCEL_BUTTON_TEXT: &str = "Cancel";

/// Body of the "Choose your dates" dialog. Both inputs start disabled so the
/// native keyboard does not pop up before the picker is attached.
pub const CHECK_AVAILABILITY_FORM_HTML: &str = concat!(
    r#"<form id="check-availability-form" action="" method="post" novalidate class="needs-validation">"#,
    r#"<div class="form-row"><div class="col">"#,
    r#"<div class="form-row" id="reservation-dates-modal">"#,
    r#"<div class="col"><input disabled required class="form-control" type="text" name="start" id="start" placeholder="Arrival"></div>"#,
    r#"<div class="col"><input disabled required class="form-control" type="text" name="end" id="end" placeholder="Departure"></div>"#,
    r#"</div>"#,
    r#"</div></div>"#,
    r#"</form>"#,
);
