//! Chronological list of trajectory cards.

use leptos::prelude::*;
use trajectories::{Clock, Trajectory, render_card};

use crate::components::trajectory_card::TrajectoryCardView;

/// Renders each record through the card dispatcher.
#[component]
pub fn TrajectoryList(trajectories: Vec<Trajectory>) -> impl IntoView {
    let clock = use_context::<Clock>().unwrap_or_default();

    if trajectories.is_empty() {
        return view! { <p class="trajectory-list__empty">"No trajectories recorded."</p> }.into_any();
    }

    view! {
        <ol class="trajectory-list">
            {trajectories
                .iter()
                .map(|t| {
                    let card = render_card(t, &clock);
                    view! {
                        <li class="trajectory-list__item">
                            <TrajectoryCardView card/>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
    .into_any()
}
