//! # System Interaction Layer
//!
//! Process execution for host adapters that run commands themselves instead
//! of delegating to an editor's build system. The command layer never calls
//! into this module directly; it always goes through a [`crate::host::Host`].

pub mod executor;
