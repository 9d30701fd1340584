//! Conformance validators, grouped by artifact.

pub mod group;
pub mod site;
