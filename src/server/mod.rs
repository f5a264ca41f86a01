//! TCP accept loop and the live-connection counter it owns.

pub mod counter;
pub mod listener;
