use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging::log;

static SUBMISSION_IN_FLIGHT: AtomicBool = AtomicBool::new(false);

/// Mirrors the modal's in-flight flag for the panic hook; signals are not
/// readable from inside a hook.
pub fn mark_submission_in_flight(in_flight: bool) {
    SUBMISSION_IN_FLIGHT.store(in_flight, Ordering::Relaxed);
}

/// Sets up a panic hook that adds review-workflow context on top of the
/// default console output.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        if SUBMISSION_IN_FLIGHT.load(Ordering::Relaxed) {
            log!("[PANIC] A review submission was in flight when this panic hit.");
            log!("[PANIC] The request is not cancelled, so the review may still reach the server.");
            log!("[PANIC] The submit control will not recover; reload the page.");
        }
    }));
}

/// Call in main.rs during app initialization.
pub fn init() {
    set_custom_panic_hook();
}
