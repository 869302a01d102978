// =============================================================================
// CS:GO Pro Web - Site Navigation Header
// =============================================================================
// Fixed header with anchor links. Turns opaque once the page is scrolled and
// collapses the links into a toggled menu on mobile.
// =============================================================================

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::Icon;
use crate::host::BrowserHost;
use crate::interaction::{NavTarget, NAV_TARGETS};
use crate::state::PageState;

/// Site header and mobile menu.
#[component]
pub fn SiteNav() -> impl IntoView {
    let state = expect_context::<PageState>();

    // Track scroll for the rest of the page lifetime
    Effect::new(move |_| {
        match BrowserHost.on_scroll(move |offset| state.on_scroll(offset)) {
            Ok(handle) => handle.detach(),
            Err(err) => log::warn!("Header will not react to scrolling: {}", err),
        }
        state.sync_scroll(&BrowserHost);
    });

    let header_class = move || {
        if state.is_scrolled() {
            "site-header scrolled"
        } else {
            "site-header"
        }
    };

    view! {
        <header class=header_class>
            <nav class="site-nav">
                <div class="nav-bar">
                    <Logo />

                    // Desktop nav links (hidden on mobile)
                    <div class="nav-links desktop-only">
                        {NAV_TARGETS
                            .into_iter()
                            .map(|target| view! { <NavLink target=target class="nav-link" /> })
                            .collect_view()}
                    </div>

                    <div class="desktop-only">
                        <button class="btn btn-primary nav-cta">
                            <Icon name="play" size=16 />
                            "Watch Live"
                        </button>
                    </div>

                    // Menu toggle (mobile only)
                    <button
                        class="menu-toggle mobile-only"
                        aria-label="Toggle menu"
                        aria-expanded=move || state.is_menu_open().to_string()
                        on:click=move |_| state.toggle_menu()
                    >
                        {move || {
                            let name = if state.is_menu_open() { "x" } else { "menu" };
                            view! { <Icon name=name /> }
                        }}
                    </button>
                </div>

                // Mobile menu
                <Show when=move || state.is_menu_open()>
                    <div class="mobile-menu mobile-only">
                        {NAV_TARGETS
                            .into_iter()
                            .map(|target| view! { <NavLink target=target class="mobile-nav-link" /> })
                            .collect_view()}
                        <button class="btn btn-primary mobile-cta">
                            <Icon name="play" size=16 />
                            "Watch Live"
                        </button>
                    </div>
                </Show>
            </nav>
        </header>
    }
}

/// Crosshair mark and wordmark.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo">
            <div class="logo-mark">
                <Icon name="crosshair" />
            </div>
            <span class="logo-text">"CS"<span class="logo-colon">":"</span>"GO"</span>
        </div>
    }
}

/// In-page link that smooth-scrolls to its anchor and closes the menu.
#[component]
pub fn NavLink(target: NavTarget, #[prop(into)] class: String) -> impl IntoView {
    let state = expect_context::<PageState>();
    let href = target.href();
    let label = target.label.to_string();

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        state.navigate(&BrowserHost, &target);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {label}
        </a>
    }
}
