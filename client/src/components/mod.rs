//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: cards arrive fully derived from the
//! `trajectories` crate, and the only state they own is per-instance UI state.

pub mod copy_button;
pub mod trajectory_card;
pub mod trajectory_list;
