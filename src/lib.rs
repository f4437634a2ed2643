//! Build-time version metadata generator for the mcast library.
//!
//! Collects the version triple, build timestamp, host platform and
//! source-control revision, then renders them as a C source fragment on
//! stdout. The surrounding build redirects that output into the compile
//! input the library links against.

pub mod config;
pub mod metadata;
pub mod render;
pub mod revision;
