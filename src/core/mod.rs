//! # Discovery & Activation Core
//!
//! Host-independent logic: locating virtualenvs and interpreters on disk and
//! computing activation state. Everything here is synchronous, blocking I/O;
//! no editor or host types appear in these signatures.

pub mod activation;
pub mod pythons;
pub mod venvs;
