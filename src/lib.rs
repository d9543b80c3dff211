// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod model;
pub mod store;
