//! Configuration: the user-facing model, its runtime form, and the
//! build-settings adapter applied to the host bundler before bundling.

mod build;
mod models;
pub mod rt;

pub use build::*;
pub use models::*;
