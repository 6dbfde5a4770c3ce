//! Page generation modules

pub mod docs;
