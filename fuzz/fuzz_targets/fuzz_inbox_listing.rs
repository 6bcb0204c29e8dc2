//! Fuzz target: decoding an upstream listing body in the page controller.
//!
//! Arbitrary JSON must never panic the controller; failed phases are fine.

#![no_main]

use inbox_core::InboxController;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let mut controller = InboxController::new();
    if controller.begin_submit("fuzz@tinyhost.shop").is_some() {
        controller.finish_submit(Ok(body));
        if let Some(id) = controller.messages().first().map(|m| m.id.clone()) {
            controller.select(&id);
            controller.find_code();
        }
    }
});
