// =============================================================================
// CS:GO Pro Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Button
// 2. Section Heading
// =============================================================================

use leptos::prelude::*;

use super::{Icon, RevealItem};
use crate::interaction::SectionId;

// -----------------------------------------------------------------------------
// 1. Button
// -----------------------------------------------------------------------------

/// Button variant styles.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Reusable button with an optional leading or trailing icon.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional)] icon_trailing: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let handle_click = move |_| {
        if let Some(callback) = &on_click {
            callback.run(());
        }
    };
    let leading = icon.clone().filter(|_| !icon_trailing);
    let trailing = icon.filter(|_| icon_trailing);

    view! {
        <button class=format!("{} {}", variant.class(), class) on:click=handle_click>
            {leading.map(|name| view! { <Icon name=name size=18 /> })}
            <span>{label}</span>
            {trailing.map(|name| view! { <Icon name=name size=16 /> })}
        </button>
    }
}

// -----------------------------------------------------------------------------
// 2. Section Heading
// -----------------------------------------------------------------------------

/// Tag line, two-tone title and description at the top of a content section.
/// The three lines reveal one after another with the section.
#[component]
pub fn SectionHeading(
    section: SectionId,
    #[prop(into)] tag: String,
    #[prop(into)] title: String,
    #[prop(into)] accent: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <RevealItem section=section index=0 class="section-tag-row">
                <div class="section-tag-bar"></div>
                <span class="section-tag">{tag}</span>
            </RevealItem>
            <RevealItem section=section index=1>
                <h2 class="section-title">
                    {title}" "<span class="text-gradient">{accent}</span>
                </h2>
            </RevealItem>
            <RevealItem section=section index=2>
                <p class="section-desc">{description}</p>
            </RevealItem>
        </div>
    }
}
