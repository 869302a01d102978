// =============================================================================
// CS:GO Pro Web - Static Site Content
// =============================================================================
// Table of Contents:
// 1. Error Types
// 2. Content Records
// 3. Loading
// 4. Tests
// =============================================================================
// Copy for every section is kept in `content/site.json` and compiled into the
// binary. Records are display-only; nothing validates them beyond decoding.
// =============================================================================

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

// -----------------------------------------------------------------------------
// 1. Error Types
// -----------------------------------------------------------------------------

/// Content loading errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content decode error: {0}")]
    Decode(String),
}

// -----------------------------------------------------------------------------
// 2. Content Records
// -----------------------------------------------------------------------------

/// Headline figure shown under the hero banner.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub category: String,
    pub date: String,
    pub icon: String,
}

/// Where a tournament is in its schedule.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Live,
    Upcoming,
    Completed,
}

impl TournamentStatus {
    pub fn label(self) -> &'static str {
        match self {
            TournamentStatus::Live => "Live",
            TournamentStatus::Upcoming => "Upcoming",
            TournamentStatus::Completed => "Completed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            TournamentStatus::Live => "status-badge status-live",
            TournamentStatus::Upcoming => "status-badge status-upcoming",
            TournamentStatus::Completed => "status-badge status-completed",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Tournament {
    pub name: String,
    pub prize: String,
    pub location: String,
    pub date: String,
    pub status: TournamentStatus,
    pub teams: u32,
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    pub rank: u32,
    pub region: String,
    pub players: Vec<String>,
    pub logo: String,
    /// Logo badge color theme, see `.team-accent-*` in the stylesheet.
    pub accent: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    pub real_name: String,
    pub team: String,
    pub nationality: String,
    pub role: String,
    pub rating: f64,
    pub icon: String,
}

impl Player {
    /// Rating with trailing zeros dropped (1.30 -> "1.3").
    pub fn rating_display(&self) -> String {
        format!("{}", self.rating)
    }
}

/// Everything the landing page displays.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteContent {
    pub hero_stats: Vec<HeroStat>,
    pub news: Vec<NewsItem>,
    pub tournaments: Vec<Tournament>,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub socials: Vec<String>,
    pub quick_links: Vec<String>,
    pub resources: Vec<String>,
}

// -----------------------------------------------------------------------------
// 3. Loading
// -----------------------------------------------------------------------------

impl SiteContent {
    /// Decode content from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(|e| ContentError::Decode(e.to_string()))
    }

    /// Content compiled into the binary. Falls back to an empty page on a
    /// decode failure.
    pub fn embedded() -> Self {
        match Self::from_json(SITE_JSON) {
            Ok(content) => content,
            Err(err) => {
                log::error!("{}", err);
                Self::default()
            }
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons;

    fn icon_names(content: &SiteContent) -> impl Iterator<Item = &str> {
        content
            .news
            .iter()
            .map(|n| n.icon.as_str())
            .chain(content.tournaments.iter().map(|t| t.icon.as_str()))
            .chain(content.teams.iter().map(|t| t.logo.as_str()))
            .chain(content.players.iter().map(|p| p.icon.as_str()))
            .chain(content.socials.iter().map(String::as_str))
    }

    #[test]
    fn test_embedded_content_decodes() {
        let content = SiteContent::from_json(SITE_JSON).unwrap();
        assert_eq!(content.hero_stats.len(), 4);
        assert_eq!(content.news.len(), 3);
        assert_eq!(content.tournaments.len(), 4);
        assert_eq!(content.teams.len(), 6);
        assert_eq!(content.players.len(), 6);
        assert_eq!(content.tournaments[0].status, TournamentStatus::Live);
        assert_eq!(content.quick_links.last().map(String::as_str), Some("Rankings"));
    }

    #[test]
    fn test_content_icons_resolve() {
        let content = SiteContent::embedded();
        for name in icon_names(&content) {
            assert!(!icons::resolve(name).is_fallback(), "missing glyph for {name}");
        }
    }

    #[test]
    fn test_social_links_name_their_glyph() {
        let socials = SiteContent::embedded().socials;
        assert_eq!(socials, vec!["twitter", "youtube", "twitch", "instagram"]);
        for social in &socials {
            assert_eq!(icons::resolve(social).name, social.as_str());
        }
    }

    #[test]
    fn test_rosters_have_five_players() {
        for team in SiteContent::embedded().teams {
            assert_eq!(team.players.len(), 5, "{}", team.name);
        }
    }

    #[test]
    fn test_rating_display() {
        let content = SiteContent::embedded();
        let ratings: Vec<String> = content.players.iter().map(Player::rating_display).collect();
        assert_eq!(ratings, vec!["1.35", "1.32", "1.28", "1.25", "1.22", "1.3"]);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            SiteContent::from_json("{ \"news\": 3 }"),
            Err(ContentError::Decode(_))
        ));
        assert_eq!(SiteContent::from_json("{}").unwrap(), SiteContent::default());
    }
}
