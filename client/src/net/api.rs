//! REST API helpers for loading trajectory records.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since records are only fetched
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so fetch failures render
//! as a message in place of the card list.

#![allow(clippy::unused_async)]

use trajectories::Trajectory;

#[cfg(any(test, feature = "hydrate"))]
fn trajectories_endpoint(session: Option<i64>) -> String {
    match session {
        Some(id) => format!("/api/trajectories?session_id={id}"),
        None => "/api/trajectories".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(status: u16) -> String {
    format!("trajectory request failed: {status}")
}

/// Fetch trajectory records, optionally limited to one session.
///
/// # Errors
///
/// Returns a display message when the request fails, the server answers with
/// a non-success status, or the body is not a record list.
pub async fn fetch_trajectories(session: Option<i64>) -> Result<Vec<Trajectory>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&trajectories_endpoint(session))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message(resp.status()));
        }
        resp.json::<Vec<Trajectory>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err("not available on server".to_owned())
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
