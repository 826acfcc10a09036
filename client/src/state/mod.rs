//! Per-card UI state kept outside the view tree so it can be unit tested.

pub mod copy;
