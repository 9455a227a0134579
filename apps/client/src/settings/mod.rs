//! Settings domain: the document model and role defaults, pure field
//! transitions, the server-partial merge, local validation, the transient
//! password-changed flag, and the view-state manager that ties them to the
//! remote adapter and notifier.

pub mod fields;
pub mod manager;
pub mod merge;
pub mod models;
pub mod password;
pub mod validation;
