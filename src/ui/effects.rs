// SPDX-License-Identifier: MPL-2.0
//! Scroll-derived visual effects.
//!
//! This component owns every one-shot, scroll-triggered animation on the
//! page: section reveals, the animated stat counters, the staggered skill
//! items, the hero parallax, and the back-to-top affordance. Visibility is
//! derived from the scrollable's offset and viewport height against the fixed
//! layout table in [`crate::content::layout`].
//!
//! Reveals are one-shot: once a target has been seen it stays revealed no
//! matter where the page scrolls afterwards. Timed progress (counters,
//! stagger) is advanced exclusively by instants from the tick subscription,
//! so tests drive it with fabricated instants.

use crate::content::{layout, SKILLS};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// How long a stat counter takes to reach its target.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// Delay between consecutive skill items appearing.
pub const STAGGER_STEP: Duration = Duration::from_millis(200);
/// Fraction of the scroll offset applied to the hero rise.
pub const PARALLAX_RATE: f32 = 0.5;

/// Page elements that fade in the first time they become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    AboutText,
    Stats,
    SkillsGrid,
    Services,
    Portfolio,
}

impl RevealTarget {
    pub const ALL: [RevealTarget; 5] = [
        RevealTarget::AboutText,
        RevealTarget::Stats,
        RevealTarget::SkillsGrid,
        RevealTarget::Services,
        RevealTarget::Portfolio,
    ];

    fn top(self) -> f32 {
        match self {
            RevealTarget::AboutText => layout::ABOUT_TEXT_TOP,
            RevealTarget::Stats => layout::STATS_TOP,
            RevealTarget::SkillsGrid => layout::SKILLS_GRID_TOP,
            RevealTarget::Services => layout::SERVICES_TOP,
            RevealTarget::Portfolio => layout::PORTFOLIO_TOP,
        }
    }
}

/// Scroll position plus all one-shot animation state.
#[derive(Debug)]
pub struct State {
    scroll_y: f32,
    viewport_height: f32,
    revealed: HashSet<RevealTarget>,
    counters_started: Option<Instant>,
    /// Counter ramp progress in `0.0..=1.0`.
    counter_progress: f32,
    stagger_started: Option<Instant>,
    stagger_elapsed: Duration,
    reduce_motion: bool,
}

impl State {
    pub fn new(reduce_motion: bool) -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height: 720.0,
            revealed: HashSet::new(),
            counters_started: None,
            counter_progress: 0.0,
            stagger_started: None,
            stagger_elapsed: Duration::ZERO,
            reduce_motion,
        }
    }

    /// Records a new scroll position and marks newly visible targets.
    pub fn on_scroll(&mut self, offset_y: f32, viewport_height: f32) {
        self.scroll_y = offset_y;
        self.viewport_height = viewport_height;

        for target in RevealTarget::ALL {
            if !self.revealed.contains(&target) && self.is_on_screen(target) {
                self.revealed.insert(target);
                tracing::debug!(?target, offset_y, "reveal triggered");
            }
        }
    }

    fn is_on_screen(&self, target: RevealTarget) -> bool {
        target.top() < self.scroll_y + self.viewport_height - layout::REVEAL_BOTTOM_MARGIN
    }

    /// Whether a target has been revealed. With reduced motion everything
    /// renders in its final state.
    #[must_use]
    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.reduce_motion || self.revealed.contains(&target)
    }

    /// Advances timed progress to `now`, starting ramps for targets revealed
    /// since the last tick.
    pub fn tick(&mut self, now: Instant) {
        if self.reduce_motion {
            self.counter_progress = 1.0;
            self.stagger_elapsed = Self::stagger_total();
            return;
        }

        if self.revealed.contains(&RevealTarget::Stats) {
            let started = *self.counters_started.get_or_insert(now);
            let elapsed = now.duration_since(started);
            self.counter_progress =
                (elapsed.as_secs_f32() / COUNTER_DURATION.as_secs_f32()).min(1.0);
        }

        if self.revealed.contains(&RevealTarget::SkillsGrid) {
            let started = *self.stagger_started.get_or_insert(now);
            self.stagger_elapsed = now.duration_since(started);
        }
    }

    /// Displayed value of a stat counter: ramps from 0, rounds up, and clamps
    /// at the target.
    #[must_use]
    pub fn counter_value(&self, target: u32) -> u32 {
        if self.reduce_motion {
            return target;
        }
        if !self.revealed.contains(&RevealTarget::Stats) {
            return 0;
        }
        ((f64::from(target) * f64::from(self.counter_progress)).ceil() as u32).min(target)
    }

    /// Whether skill item `index` has appeared yet.
    #[must_use]
    pub fn skill_visible(&self, index: usize) -> bool {
        if self.reduce_motion {
            return true;
        }
        if !self.revealed.contains(&RevealTarget::SkillsGrid) || self.stagger_started.is_none() {
            return false;
        }
        self.stagger_elapsed >= STAGGER_STEP * index as u32
    }

    /// Upward shift of the hero content, active only while the scroll offset
    /// is still inside the hero.
    #[must_use]
    pub fn parallax_rise(&self) -> f32 {
        if self.reduce_motion || self.scroll_y >= layout::HERO_HEIGHT {
            0.0
        } else {
            self.scroll_y * PARALLAX_RATE
        }
    }

    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.scroll_y > layout::NAVBAR_SCROLLED_AT
    }

    #[must_use]
    pub fn show_back_to_top(&self) -> bool {
        self.scroll_y > layout::BACK_TO_TOP_AT
    }

    fn stagger_total() -> Duration {
        STAGGER_STEP * SKILLS.len().saturating_sub(1) as u32
    }

    /// Whether any timed ramp still needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        if self.reduce_motion {
            return false;
        }
        let counters_running =
            self.revealed.contains(&RevealTarget::Stats) && self.counter_progress < 1.0;
        let stagger_running = self.revealed.contains(&RevealTarget::SkillsGrid)
            && self.stagger_elapsed < Self::stagger_total();
        counters_running || stagger_running
    }
}
