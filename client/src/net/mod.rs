//! Network helpers for talking to the viewer host.

pub mod api;
