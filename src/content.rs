// SPDX-License-Identifier: MPL-2.0
//! Static page content and the section layout table.
//!
//! The portfolio page is a fixed layout, so scroll-derived behavior (navbar
//! styling, reveals, parallax, back-to-top) works from the offsets recorded
//! here rather than measuring widgets at runtime. Display strings live in the
//! Fluent bundles; this module only holds keys, proper nouns, and numbers.

/// Sections reachable from the navigation bar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// i18n key for the nav link label.
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Services => "nav-services",
            Section::Portfolio => "nav-portfolio",
            Section::Contact => "nav-contact",
        }
    }

    /// Top offset of the section within the page, in logical pixels.
    pub fn top(self) -> f32 {
        match self {
            Section::Home => layout::HERO_TOP,
            Section::About => layout::ABOUT_TOP,
            Section::Services => layout::SERVICES_TOP,
            Section::Portfolio => layout::PORTFOLIO_TOP,
            Section::Contact => layout::CONTACT_TOP,
        }
    }
}

/// Fixed page geometry and scroll thresholds.
pub mod layout {
    /// Height of the fixed navigation bar; scroll targets subtract it so a
    /// section's heading lands below the bar.
    pub const NAVBAR_HEIGHT: f32 = 80.0;

    pub const HERO_TOP: f32 = 0.0;
    pub const HERO_HEIGHT: f32 = 620.0;

    pub const ABOUT_TOP: f32 = 620.0;
    pub const ABOUT_TEXT_TOP: f32 = 700.0;
    pub const STATS_TOP: f32 = 940.0;
    pub const SKILLS_GRID_TOP: f32 = 1080.0;

    pub const SERVICES_TOP: f32 = 1360.0;
    pub const PORTFOLIO_TOP: f32 = 1900.0;
    pub const CONTACT_TOP: f32 = 2480.0;

    /// Scroll offset past which the navbar switches to its "scrolled" style.
    pub const NAVBAR_SCROLLED_AT: f32 = 100.0;

    /// Scroll offset past which the back-to-top affordance appears.
    pub const BACK_TO_TOP_AT: f32 = 500.0;

    /// Margin pulled in from the viewport bottom before a target counts as
    /// visible, so reveals fire once content is properly on screen.
    pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;
}

/// Identifies a hoverable card on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardId {
    Service(usize),
    Portfolio(usize),
}

pub struct Service {
    pub glyph: &'static str,
    pub title_key: &'static str,
    pub blurb_key: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        glyph: "◧",
        title_key: "service-design-title",
        blurb_key: "service-design-blurb",
    },
    Service {
        glyph: "⌘",
        title_key: "service-development-title",
        blurb_key: "service-development-blurb",
    },
    Service {
        glyph: "⟳",
        title_key: "service-maintenance-title",
        blurb_key: "service-maintenance-blurb",
    },
];

pub struct PortfolioItem {
    pub title_key: &'static str,
    pub blurb_key: &'static str,
    pub tags: &'static [&'static str],
}

pub const PORTFOLIO_ITEMS: [PortfolioItem; 3] = [
    PortfolioItem {
        title_key: "portfolio-storefront-title",
        blurb_key: "portfolio-storefront-blurb",
        tags: &["React", "Node.js", "Stripe"],
    },
    PortfolioItem {
        title_key: "portfolio-dashboard-title",
        blurb_key: "portfolio-dashboard-blurb",
        tags: &["TypeScript", "D3"],
    },
    PortfolioItem {
        title_key: "portfolio-landing-title",
        blurb_key: "portfolio-landing-blurb",
        tags: &["HTML", "CSS", "JavaScript"],
    },
];

/// Skill names are proper nouns and stay unlocalized.
pub const SKILLS: [&str; 6] = [
    "HTML & CSS",
    "JavaScript",
    "React",
    "Node.js",
    "UI Design",
    "Git",
];

pub struct Stat {
    pub label_key: &'static str,
    pub target: u32,
}

pub const STATS: [Stat; 3] = [
    Stat {
        label_key: "stat-projects",
        target: 50,
    },
    Stat {
        label_key: "stat-years",
        target: 5,
    },
    Stat {
        label_key: "stat-clients",
        target: 25,
    },
];
