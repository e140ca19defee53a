//! Process exit status around the window event loop.
//!
//! miniquad reports a window or graphics context it cannot create by panicking, so the
//! loop is run under `catch_unwind` and any panic becomes a logged failure with status 1.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Run `start` and map its outcome to a process exit status
pub fn run_guarded<F: FnOnce()>(start: F) -> i32 {
    match panic::catch_unwind(AssertUnwindSafe(start)) {
        Ok(()) => EXIT_SUCCESS,
        Err(payload) => {
            log::error!("Failed to run the game window: {}", panic_message(payload.as_ref()));
            EXIT_FAILURE
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
