//! DOM rendering for one [`trajectories::TrajectoryCard`].
//!
//! The header row is the toggle trigger for collapsible cards. Header sections
//! always render below it; body sections render only while expanded.

use leptos::prelude::*;
use trajectories::{Field, Section, TrajectoryCard, UsageFooter};

use crate::components::copy_button::CopyButton;
use crate::util::markdown::render_markdown_html;

/// Card container with header, optional copy control and collapsible body.
#[component]
pub fn TrajectoryCardView(card: TrajectoryCard) -> impl IntoView {
    let expansion = RwSignal::new(card.expansion);
    let collapsible = card.expansion.is_collapsible();
    let is_error = card.error_block().is_some();
    let icon = card.icon;
    let body = StoredValue::new(card.body);

    let on_toggle = move |_: leptos::ev::MouseEvent| expansion.update(|state| *state = state.toggled());
    let expanded = move || expansion.get().is_expanded();

    let header_sections = card
        .header
        .into_iter()
        .map(|section| view! { <CardSection section/> })
        .collect_view();

    view! {
        <article class="trajectory-card" class:trajectory-card--error=is_error data-id=card.id.to_string()>
            <header
                class="trajectory-card__header"
                class:trajectory-card__header--toggle=collapsible
                on:click=on_toggle
            >
                <span class=format!("trajectory-card__icon trajectory-card__icon--{}", icon.modifier())>
                    {icon.glyph()}
                </span>
                <div class="trajectory-card__heading">
                    <h3 class="trajectory-card__title">{card.title}</h3>
                    {card.summary.map(|summary| view! { <p class="trajectory-card__summary">{summary}</p> })}
                </div>
                <div class="trajectory-card__meta">
                    {card.copy_text.map(|text| view! { <CopyButton text/> })}
                    <time class="trajectory-card__time">{card.time}</time>
                    {collapsible
                        .then(|| {
                            view! {
                                <span class="trajectory-card__chevron">
                                    {move || if expanded() { "▾" } else { "▸" }}
                                </span>
                            }
                        })}
                </div>
            </header>
            <div class="trajectory-card__content">{header_sections}</div>
            <Show when=expanded>
                <div class="trajectory-card__body">
                    {move || {
                        body.get_value()
                            .into_iter()
                            .map(|section| view! { <CardSection section/> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </article>
    }
}

/// One content block of a card.
#[component]
fn CardSection(section: Section) -> impl IntoView {
    match section {
        Section::Parameters(pairs) => view! {
            <div class="trajectory-card__block">
                <h4 class="trajectory-card__label">"Parameters:"</h4>
                <pre class="trajectory-card__pre">
                    {pairs
                        .into_iter()
                        .map(|(key, value)| {
                            view! {
                                <div class="trajectory-card__param">
                                    <span class="trajectory-card__key">{key}":"</span>
                                    " "
                                    {value}
                                </div>
                            }
                        })
                        .collect_view()}
                </pre>
            </div>
        }
        .into_any(),
        Section::Result(text) => labelled_pre("Result:", text, "trajectory-card__pre").into_any(),
        Section::Output(text) => labelled_pre("Output:", text, "trajectory-card__pre trajectory-card__pre--tall").into_any(),
        Section::FileList(list) => labelled_pre("Files:", list, "trajectory-card__pre").into_any(),
        Section::Markdown { heading, source } => view! {
            <div class="trajectory-card__block">
                {heading.map(|heading| view! { <h4 class="trajectory-card__label">{heading}</h4> })}
                <div class="markdown" inner_html=render_markdown_html(&source)></div>
            </div>
        }
        .into_any(),
        Section::Preformatted(text) => view! {
            <pre class="trajectory-card__pre trajectory-card__pre--wrap">{text}</pre>
        }
        .into_any(),
        Section::Text(text) => view! { <p class="trajectory-card__text">{text}</p> }.into_any(),
        Section::Json(json) => view! { <pre class="trajectory-card__pre">{json}</pre> }.into_any(),
        Section::Fields(fields) => view! {
            <div class="trajectory-card__fields">
                {fields.into_iter().map(field_row).collect_view()}
            </div>
        }
        .into_any(),
        Section::Badge(text) => view! { <span class="trajectory-card__badge">{text}</span> }.into_any(),
        Section::Diff(diff) => view! {
            <details class="trajectory-card__diff">
                <summary>"Show Diff"</summary>
                <pre class="trajectory-card__pre">
                    <code>{diff}</code>
                </pre>
            </details>
        }
        .into_any(),
        Section::Placeholder(text) => view! { <p class="trajectory-card__placeholder">{text}</p> }.into_any(),
        Section::Error(block) => view! {
            <div class="trajectory-card__error">
                <h4 class="trajectory-card__label">"Error:"</h4>
                <pre class="trajectory-card__pre">{block.text()}</pre>
            </div>
        }
        .into_any(),
        Section::Usage(usage) => usage_footer(usage).into_any(),
    }
}

fn labelled_pre(label: &'static str, text: String, class: &'static str) -> impl IntoView {
    view! {
        <div class="trajectory-card__block">
            <h4 class="trajectory-card__label">{label}</h4>
            <pre class=class>{text}</pre>
        </div>
    }
}

fn field_row(field: Field) -> impl IntoView {
    let value = if field.code {
        view! { <code class="trajectory-card__code">{field.value}</code> }.into_any()
    } else {
        view! { <span>{field.value}</span> }.into_any()
    };
    view! {
        <p class="trajectory-card__field">
            <span class="trajectory-card__field-label">{field.label}": "</span>
            {value}
        </p>
    }
}

fn usage_footer(usage: UsageFooter) -> impl IntoView {
    view! {
        <footer class="trajectory-card__usage">
            {usage.cost.map(|cost| view! { <span class="trajectory-card__cost">{cost}</span> })}
            {usage.tokens.map(|tokens| view! { <span class="trajectory-card__tokens">{tokens}</span> })}
        </footer>
    }
}
