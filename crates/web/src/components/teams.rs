// =============================================================================
// CS:GO Pro Web - Teams Section
// =============================================================================

use leptos::prelude::*;

use super::{Icon, RevealItem, RevealSection, SectionHeading};
use crate::content::Team;
use crate::interaction::SectionId;

const SECTION: SectionId = SectionId::Teams;

/// Top teams grid with rosters.
#[component]
pub fn TeamsSection(teams: Vec<Team>) -> impl IntoView {
    view! {
        <RevealSection section=SECTION class="teams-section">
            <div class="section-divider"></div>
            <div class="container">
                <SectionHeading
                    section=SECTION
                    tag="Pro Scene"
                    title="Top"
                    accent="Teams"
                    description="The elite organizations competing at the highest level of Counter-Strike."
                />

                <div class="card-grid">
                    {teams
                        .into_iter()
                        .enumerate()
                        .map(|(index, team)| view! {
                            <RevealItem section=SECTION index=index class="lift-on-hover">
                                <TeamCard team=team />
                            </RevealItem>
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn TeamCard(team: Team) -> impl IntoView {
    view! {
        <div class="team-card">
            <div class="team-card-top">
                <div class=format!("team-logo team-accent-{}", team.accent)>
                    <Icon name=team.logo size=32 />
                </div>
                <div class="team-rank">
                    <div class="team-rank-value">{format!("#{}", team.rank)}</div>
                    <div class="figure-label">"World Rank"</div>
                </div>
            </div>

            <h3 class="team-name">{team.name}</h3>
            <div class="meta-item">
                <Icon name="globe" size=16 />
                {team.region}
            </div>

            <div class="team-roster">
                <div class="figure-label">"Roster"</div>
                <div class="roster-chips">
                    {team
                        .players
                        .into_iter()
                        .map(|player| view! { <span class="roster-chip">{player}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
