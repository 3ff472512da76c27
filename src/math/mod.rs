//! Pricing math for the pool engine.
//!
//! Everything here is a pure function of explicit inputs; nothing reads
//! engine state.

pub mod swap;
