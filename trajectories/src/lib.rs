//! Trajectory record model and card derivation for agent execution traces.
//!
//! This crate is UI-framework agnostic so client crates can consume it directly
//! for rendering trajectory cards. Every record is mapped to a
//! [`TrajectoryCard`] by a pure renderer selected from the record's
//! discriminant; the client only turns cards into DOM.

pub mod card;
pub mod format;
pub mod model;
pub mod payload;
pub mod renderers;
pub mod samples;
pub mod steps;

pub use card::{CardIcon, ErrorBlock, Expansion, Field, Section, TrajectoryCard, UsageFooter};
pub use format::Clock;
pub use model::Trajectory;
pub use renderers::render_card;
pub use steps::Step;
