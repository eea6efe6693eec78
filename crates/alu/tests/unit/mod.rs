//! # Unit Components
//!
//! Organizes the unit tests to mirror the crate layout: shared types, the
//! bit-vector codec, the execution units, the operation catalogue and the
//! configuration layer.
