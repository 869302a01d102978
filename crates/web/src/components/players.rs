// =============================================================================
// CS:GO Pro Web - Players Section
// =============================================================================

use leptos::prelude::*;

use super::{Icon, RevealItem, RevealSection, SectionHeading};
use crate::content::Player;
use crate::interaction::SectionId;

const SECTION: SectionId = SectionId::Players;

/// Star player cards.
#[component]
pub fn PlayersSection(players: Vec<Player>) -> impl IntoView {
    view! {
        <RevealSection section=SECTION class="players-section">
            <div class="container">
                <SectionHeading
                    section=SECTION
                    tag="Star Power"
                    title="Pro"
                    accent="Players"
                    description="The individual talents that define the competitive landscape of Counter-Strike."
                />

                <div class="card-grid">
                    {players
                        .into_iter()
                        .enumerate()
                        .map(|(index, player)| view! {
                            <RevealItem section=SECTION index=index class="grow-on-hover">
                                <PlayerCard player=player />
                            </RevealItem>
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn PlayerCard(player: Player) -> impl IntoView {
    let rating = player.rating_display();

    view! {
        <div class="player-card">
            <div class="player-corner"></div>
            <div class="player-header">
                <div class="player-avatar">
                    <Icon name=player.icon size=40 />
                </div>
                <div>
                    <h3 class="player-name">{player.name}</h3>
                    <p class="player-real-name">{player.real_name}</p>
                </div>
            </div>

            <div class="player-stats">
                <div class="player-stat">
                    <div class="player-stat-value accent">{rating}</div>
                    <div class="figure-label">"Rating"</div>
                </div>
                <div class="player-stat">
                    <div class="player-stat-value">{player.role}</div>
                    <div class="figure-label">"Role"</div>
                </div>
                <div class="player-stat">
                    <div class="player-stat-value">{player.team}</div>
                    <div class="figure-label">"Team"</div>
                </div>
            </div>

            <div class="player-footer">
                <div class="meta-item">
                    <Icon name="flag" size=16 />
                    {player.nationality}
                </div>
                <button class="link-button">
                    "View Stats"
                    <Icon name="arrow-right" size=16 />
                </button>
            </div>
        </div>
    }
}
