//! Job application submission: local resume validation and the guarded
//! upload flow.

pub mod apply;

pub use apply::{ApplicationFlow, ApplicationSubmission, ResumeFile};
