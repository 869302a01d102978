// =============================================================================
// CS:GO Pro Web - Viewport Reveal Components
// =============================================================================
// Table of Contents:
// 1. RevealSection
// 2. RevealItem
// =============================================================================

use leptos::html;
use leptos::prelude::*;

use crate::host::BrowserHost;
use crate::interaction::{stagger_delay_ms, SectionId};
use crate::state::PageState;

// -----------------------------------------------------------------------------
// 1. RevealSection
// -----------------------------------------------------------------------------

/// Anchored page section that marks itself revealed the first time it
/// scrolls into view.
#[component]
pub fn RevealSection(
    section: SectionId,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let state = expect_context::<PageState>();
    let section_ref = NodeRef::<html::Section>::new();

    Effect::new(move |subscribed: Option<bool>| {
        if subscribed == Some(true) {
            return true;
        }
        let Some(element) = section_ref.get() else {
            return false;
        };
        match BrowserHost.observe_once(&element, state.observe_options(), move || {
            state.reveal(section)
        }) {
            Ok(handle) => handle.detach(),
            Err(err) => log::warn!("Section #{} will not animate in: {}", section.anchor(), err),
        }
        true
    });

    view! {
        <section id=section.anchor() class=format!("page-section {}", class) node_ref=section_ref>
            {children()}
        </section>
    }
}

// -----------------------------------------------------------------------------
// 2. RevealItem
// -----------------------------------------------------------------------------

/// Child of a `RevealSection`; fades in `index` stagger steps after the
/// section is revealed and stays visible.
#[component]
pub fn RevealItem(
    section: SectionId,
    index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let state = expect_context::<PageState>();
    let delay = stagger_delay_ms(index, state.stagger_interval());

    view! {
        <div
            class=format!("reveal-item {}", class)
            class:visible=move || state.is_revealed(section)
            style=format!("transition-delay: {}ms", delay)
        >
            {children()}
        </div>
    }
}
