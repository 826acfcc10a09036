//! Trajectory page listing every record, optionally filtered by session.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. `?session=N` narrows the list to one agent session;
//! records are fetched in the browser after hydration.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::trajectory_list::TrajectoryList;

/// Parse the `session` query value; anything non-numeric means "all sessions".
#[must_use]
pub fn parse_session(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// Trajectory list page.
#[component]
pub fn TrajectoriesPage() -> impl IntoView {
    let query = use_query_map();
    let session = move || parse_session(query.read().get("session").as_deref());

    let records = LocalResource::new(move || crate::net::api::fetch_trajectories(session()));

    let heading = move || match session() {
        Some(id) => format!("Session {id}"),
        None => "All trajectories".to_owned(),
    };

    view! {
        <main class="trajectories-page">
            <header class="trajectories-page__header">
                <h1>{heading}</h1>
            </header>
            <Suspense fallback=move || view! { <p class="trajectories-page__loading">"Loading trajectories..."</p> }>
                {move || {
                    records
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <TrajectoryList trajectories=list/> }.into_any(),
                            Err(err) => {
                                leptos::logging::warn!("failed to load trajectories: {err}");
                                view! { <p class="trajectories-page__error">{err}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </main>
    }
}

#[cfg(test)]
#[path = "trajectories_test.rs"]
mod tests;
