//! Client-side state shared across auth flows.

pub mod session;
