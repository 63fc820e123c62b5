//! Student registration aggregate: record types, choice sets, validation,
//! step orchestration and the multipart submission encoding.

pub mod encode;
pub mod enums;
pub mod record;
pub mod summary;
pub mod validate;
pub mod wizard;
