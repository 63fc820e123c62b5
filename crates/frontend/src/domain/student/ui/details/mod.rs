//! Read-only student detail page.

mod model;
mod view;

pub use view::StudentDetails;
