//! Copy-to-clipboard trigger shared by every trajectory card.
//!
//! The trigger sits inside a card header that toggles on click, so it stops
//! propagation before doing anything else. The confirmation timer is stored
//! per instance; replacing or dropping it cancels the pending reset.

use leptos::prelude::*;

use crate::state::copy::CopyFeedback;
#[cfg(feature = "hydrate")]
use crate::state::copy::COPY_CONFIRM_MS;

/// Button that writes `text` to the clipboard and briefly shows a check mark.
#[component]
pub fn CopyButton(#[prop(into)] text: String) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());

    #[cfg(feature = "hydrate")]
    let pending = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        pending.try_update_value(|timer| timer.take());
    });

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        #[cfg(feature = "hydrate")]
        {
            let text = text.clone();
            leptos::task::spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => {
                        let Some(generation) = feedback.try_update(CopyFeedback::confirm) else {
                            return;
                        };
                        let timer = gloo_timers::callback::Timeout::new(COPY_CONFIRM_MS, move || {
                            feedback.try_update(|state| state.expire(generation));
                        });
                        pending.try_update_value(|slot| *slot = Some(timer));
                    }
                    Err(err) => leptos::logging::error!("clipboard write failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &text;
        }
    };

    let copied = move || feedback.get().is_copied();

    view! {
        <button
            type="button"
            class="copy-button"
            class:copy-button--copied=copied
            title=move || if copied() { "Copied!" } else { "Copy to clipboard" }
            aria-label="Copy to clipboard"
            on:click=on_click
        >
            {move || if copied() { "✓" } else { "⧉" }}
        </button>
    }
}

#[cfg(feature = "hydrate")]
async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let clipboard = window
        .navigator()
        .clipboard()
        .ok_or_else(|| "clipboard unavailable".to_owned())?;
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| format!("{err:?}"))
}
