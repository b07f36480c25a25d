//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the small pieces of event and reactivity glue that
//! can be tested without a browser.

pub mod change_feed;
pub mod keyboard;
pub mod value_watch;
