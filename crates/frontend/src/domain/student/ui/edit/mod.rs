//! Edit page for an existing registration.
//!
//! Reuses the wizard's view model and step sections, rendered as one
//! long form with a single save action.

mod model;
mod view;

pub use view::StudentEdit;
