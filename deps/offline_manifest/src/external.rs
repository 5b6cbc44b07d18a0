//! Re-exports for dependents, so they don't pin their own versions.

pub use indexmap;
