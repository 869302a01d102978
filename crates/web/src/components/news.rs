// =============================================================================
// CS:GO Pro Web - Latest News Section
// =============================================================================

use leptos::prelude::*;

use super::{Button, ButtonVariant, Icon, RevealItem, RevealSection, SectionHeading};
use crate::content::NewsItem;
use crate::interaction::SectionId;

const SECTION: SectionId = SectionId::News;

/// News card grid.
#[component]
pub fn NewsSection(items: Vec<NewsItem>) -> impl IntoView {
    let footer_index = items.len();

    view! {
        <RevealSection section=SECTION class="news-section">
            <div class="dot-pattern"></div>
            <div class="container">
                <SectionHeading
                    section=SECTION
                    tag="Latest Updates"
                    title="Gaming"
                    accent="News"
                    description="Stay updated with the latest Counter-Strike news, roster changes, and tournament announcements."
                />

                <div class="card-grid">
                    {items
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| view! {
                            <RevealItem section=SECTION index=index class="lift-on-hover">
                                <NewsCard item=item />
                            </RevealItem>
                        })
                        .collect_view()}
                </div>

                <RevealItem section=SECTION index=footer_index class="section-more">
                    <Button
                        label="View All News"
                        icon="newspaper"
                        icon_trailing=true
                        variant=ButtonVariant::Ghost
                    />
                </RevealItem>
            </div>
        </RevealSection>
    }
}

#[component]
fn NewsCard(item: NewsItem) -> impl IntoView {
    view! {
        <article class="news-card" data-id=item.id.to_string()>
            <div class="news-image">
                <img src=item.image alt=item.title.clone() />
                <div class="news-image-shade"></div>
                <span class="news-category">{item.category}</span>
            </div>
            <div class="news-body">
                <div class="news-meta">
                    <Icon name="clock" size=16 />
                    <span>{item.date}</span>
                    <Icon name=item.icon size=16 class="news-kind" />
                </div>
                <h3 class="news-title">{item.title}</h3>
                <p class="news-excerpt">{item.excerpt}</p>
                <button class="link-button">
                    "Read More"
                    <Icon name="arrow-right" size=16 />
                </button>
            </div>
        </article>
    }
}
