//! Registration wizard UI module.
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (lookups, multipart register)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs + steps/: Leptos components (pure UI)

pub(crate) mod model;
pub(crate) mod steps;
mod view;
mod view_model;

pub use view::RegistrationPage;
pub use view_model::RegistrationVm;
