//! Chat UI Module (MVVM)
//!
//! - model.rs: API functions
//! - view_model.rs: ChatVm with RwSignals
//! - view.rs: ChatPage component
//! - analysis_panel.rs: analysis sections under the transcript

mod analysis_panel;
mod model;
pub mod view;
mod view_model;

pub use view::ChatPage;
pub use view_model::ChatVm;
