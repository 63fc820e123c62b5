//! Data contracts shared between the registration frontend and the REST
//! backend, plus the platform-neutral wizard core (validation, step
//! orchestration, submission encoding).

pub mod domain;
