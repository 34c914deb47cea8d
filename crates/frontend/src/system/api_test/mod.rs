//! API Test Panel (debug)
//!
//! Sends one fixed generate request straight to the model server, bypassing
//! the client crate, and shows the raw JSON body.
//!
//! Structure:
//! - model.rs: the raw request via gloo-net
//! - view_model.rs: ApiTestVm with RwSignals
//! - view.rs: ApiTestPanel component

mod model;
mod view;
mod view_model;

pub use view::ApiTestPanel;
pub use view_model::ApiTestVm;
