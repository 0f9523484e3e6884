use log::Level;

pub const FORM_ID: &str = "demoForm";

// Timings, in milliseconds
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const GENERAL_ERROR_DISMISS_MS: u32 = 5_000;
pub const SUCCESS_DISMISS_MS: u32 = 10_000;
pub const SLIDE_OUT_MS: u32 = 300;
pub const HIGHLIGHT_MS: u32 = 3_000;
pub const COUNTER_TICK_MS: u32 = 20;

pub const COUNTER_STEPS: u32 = 100;

/// Gap left between the sticky header and an anchor target after scrolling.
pub const SCROLL_MARGIN_PX: f64 = 20.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn is_development() -> bool {
    cfg!(debug_assertions)
}

pub fn log_level() -> Level {
    if is_development() {
        Level::Debug
    } else {
        Level::Info
    }
}
