// =============================================================================
// CS:GO Pro Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Chrome (nav, footer)
// 2. Building Blocks (icon, reveal, common)
// 3. Page Sections
// =============================================================================

pub mod common;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod nav;
pub mod news;
pub mod players;
pub mod reveal;
pub mod teams;
pub mod tournaments;

pub use common::{Button, ButtonVariant, SectionHeading};
pub use footer::Footer;
pub use hero::HeroSection;
pub use icon::Icon;
pub use nav::SiteNav;
pub use news::NewsSection;
pub use players::PlayersSection;
pub use reveal::{RevealItem, RevealSection};
pub use teams::TeamsSection;
pub use tournaments::TournamentsSection;
