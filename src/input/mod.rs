//! Keyboard input

mod router;

pub use router::{route_key, route_key_event};
