// =============================================================================
// CS:GO Pro Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::components::{
    Footer, HeroSection, NewsSection, PlayersSection, SiteNav, TeamsSection, TournamentsSection,
};
use crate::config::PageConfig;
use crate::content::SiteContent;
use crate::state::PageState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root component: a single page of anchored sections.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PageConfig::from_build_env();
    let page_state = PageState::new(&config);
    provide_context(page_state);

    let SiteContent {
        hero_stats,
        news,
        tournaments,
        teams,
        players,
        socials,
        quick_links,
        resources,
    } = SiteContent::embedded();

    view! {
        <Title text="CS:GO Pro - Counter-Strike News, Tournaments & Teams" />
        <Meta name="theme-color" content="#f59e0b" />

        <div class="app">
            <SiteNav />
            <main>
                <HeroSection stats=hero_stats />
                <NewsSection items=news />
                <TournamentsSection tournaments=tournaments />
                <TeamsSection teams=teams />
                <PlayersSection players=players />
            </main>
            <Footer socials=socials quick_links=quick_links resources=resources />
        </div>
    }
}
