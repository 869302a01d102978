// =============================================================================
// CS:GO Pro Web - Tournaments Section
// =============================================================================

use leptos::prelude::*;

use super::{Icon, RevealItem, RevealSection, SectionHeading};
use crate::content::Tournament;
use crate::interaction::SectionId;

const SECTION: SectionId = SectionId::Tournaments;

/// Tournament list with status badges.
#[component]
pub fn TournamentsSection(tournaments: Vec<Tournament>) -> impl IntoView {
    view! {
        <RevealSection section=SECTION class="tournaments-section">
            <div class="container">
                <SectionHeading
                    section=SECTION
                    tag="Competitive Scene"
                    title="Major"
                    accent="Tournaments"
                    description="Follow the biggest CS:GO competitions with millions in prize pools and the world's best teams competing."
                />

                <div class="tournament-list">
                    {tournaments
                        .into_iter()
                        .enumerate()
                        .map(|(index, tournament)| view! {
                            <RevealItem section=SECTION index=index class="grow-on-hover">
                                <TournamentRow tournament=tournament />
                            </RevealItem>
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn TournamentRow(tournament: Tournament) -> impl IntoView {
    let status = tournament.status;

    view! {
        <div class="tournament-row">
            <div class="tournament-main">
                <div class="tournament-icon">
                    <Icon name=tournament.icon size=32 />
                </div>
                <div>
                    <div class="tournament-title-row">
                        <h3 class="tournament-name">{tournament.name}</h3>
                        <span class=status.badge_class()>{status.label()}</span>
                    </div>
                    <div class="tournament-meta">
                        <span class="meta-item">
                            <Icon name="map-pin" size=16 />
                            {tournament.location}
                        </span>
                        <span class="meta-item">
                            <Icon name="calendar" size=16 />
                            {tournament.date}
                        </span>
                    </div>
                </div>
            </div>

            <div class="tournament-figures">
                <div class="figure">
                    <div class="figure-value accent">{tournament.prize}</div>
                    <div class="figure-label">"Prize Pool"</div>
                </div>
                <div class="figure">
                    <div class="figure-value">{tournament.teams}</div>
                    <div class="figure-label">"Teams"</div>
                </div>
                <button class="btn btn-details">
                    "Details"
                    <Icon name="chevron-right" size=16 />
                </button>
            </div>
        </div>
    }
}
