//! Active-section tracking for the navigation bar.
//!
//! The browser reports visibility changes in batches; [`SectionTracker`] keeps
//! the latest report per section and decides which one is "active".

use std::cmp::Ordering;

/// Page offset (px) past which the navigation bar switches to its solid style.
pub const SCROLLED_OFFSET: f64 = 50.0;

/// Visibility thresholds handed to the intersection observer.
pub const OBSERVER_THRESHOLDS: [f64; 3] = [0.2, 0.35, 0.5];

/// Shrinks the observed viewport towards its upper part.
pub const OBSERVER_ROOT_MARGIN: &str = "-20% 0px -60% 0px";

pub type SectionId = &'static str;

/// One visibility report for a section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionVisibility {
    pub id: String,
    pub intersecting: bool,
    pub ratio: f64,
    /// Distance of the section's top edge from the viewport top, in px.
    pub top: f64,
}

impl SectionVisibility {
    pub fn new(id: impl Into<String>, intersecting: bool, ratio: f64, top: f64) -> Self {
        Self {
            id: id.into(),
            intersecting,
            ratio,
            top,
        }
    }

    fn is_visible(&self) -> bool {
        self.intersecting && self.ratio > 0.0
    }
}

/// Picks the most visible section out of `snapshot`.
///
/// Only intersecting entries compete. Highest ratio wins; equal ratios go to
/// the section whose top edge sits closest to the viewport top, then to the
/// earlier entry. With no candidate the `previous` id is kept.
pub fn select_active<'a>(previous: &'a str, snapshot: &'a [SectionVisibility]) -> &'a str {
    snapshot
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_visible())
        .max_by(|(ai, a), (bi, b)| {
            a.ratio
                .partial_cmp(&b.ratio)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.top
                        .abs()
                        .partial_cmp(&a.top.abs())
                        .unwrap_or(Ordering::Equal)
                })
                // max_by keeps the last maximum, so prefer the lower index explicitly
                .then_with(|| bi.cmp(ai))
        })
        .map(|(_, v)| v.id.as_str())
        .unwrap_or(previous)
}

#[derive(Debug, Clone)]
struct Watched {
    id: SectionId,
    latest: Option<SectionVisibility>,
}

#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<Watched>,
    active: SectionId,
}

impl SectionTracker {
    /// Panics if `ids` is empty.
    pub fn new(ids: &[SectionId]) -> Self {
        assert!(!ids.is_empty(), "tracker needs at least one section");
        Self {
            sections: ids
                .iter()
                .map(|&id| Watched { id, latest: None })
                .collect(),
            active: ids[0],
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn watched(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|w| w.id)
    }

    /// One `#id` selector per watched section, in page order.
    ///
    /// Kept as separate selectors: the observer resolves each one on its own.
    pub fn selectors(&self) -> Vec<String> {
        self.watched().map(|id| format!("#{id}")).collect()
    }

    /// Drops every section not listed in `present`.
    ///
    /// Sections missing from the document are skipped rather than treated as
    /// an error. When nothing is left the tracker keeps its current sections.
    pub fn retain_present(&mut self, present: &[&str]) {
        let before = self.sections.len();
        let kept = self
            .sections
            .iter()
            .filter(|w| present.contains(&w.id))
            .cloned()
            .collect::<Vec<_>>();
        if kept.is_empty() {
            log::warn!("none of the tracked sections are in the document");
            return;
        }
        if kept.len() != before {
            log::debug!("tracking {} of {} sections", kept.len(), before);
        }
        self.sections = kept;
        if !self.sections.iter().any(|w| w.id == self.active) {
            self.active = self.sections[0].id;
        }
    }

    /// Merges a batch of reports and returns the new active id if it changed.
    pub fn observe<I>(&mut self, batch: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = SectionVisibility>,
    {
        for update in batch {
            match self.sections.iter_mut().find(|w| w.id == update.id) {
                Some(watched) => watched.latest = Some(update),
                None => log::trace!("ignoring visibility for unknown section {}", update.id),
            }
        }

        let snapshot = self
            .sections
            .iter()
            .filter_map(|w| w.latest.clone())
            .collect::<Vec<_>>();
        let selected = select_active(self.active, &snapshot);
        // map back onto the 'static id so the tracker never holds a foreign string
        let next = self
            .sections
            .iter()
            .find(|w| w.id == selected)
            .map(|w| w.id)
            .unwrap_or(self.active);

        if next == self.active {
            None
        } else {
            log::debug!("active section {} -> {}", self.active, next);
            self.active = next;
            Some(next)
        }
    }
}

/// Whether the page has scrolled far enough for the solid navigation style.
pub fn is_scrolled(y: f64) -> bool {
    y > SCROLLED_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [SectionId; 5] = ["about", "skills", "achievements", "projects", "contact"];

    fn vis(id: &str, ratio: f64) -> SectionVisibility {
        SectionVisibility::new(id, ratio > 0.0, ratio, 0.0)
    }

    #[test]
    fn test_defaults_to_first_section() {
        let tracker = SectionTracker::new(&IDS);
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn test_single_visible_section_wins() {
        let mut tracker = SectionTracker::new(&IDS);
        let changed = tracker.observe(vec![
            vis("about", 0.0),
            vis("skills", 0.0),
            vis("projects", 0.35),
            vis("contact", 0.0),
        ]);
        assert_eq!(changed, Some("projects"));
        assert_eq!(tracker.active(), "projects");
    }

    #[test]
    fn test_highest_ratio_wins() {
        let mut tracker = SectionTracker::new(&IDS);
        tracker.observe(vec![vis("skills", 0.2), vis("achievements", 0.5)]);
        assert_eq!(tracker.active(), "achievements");
    }

    #[test]
    fn test_nothing_intersecting_keeps_previous() {
        let mut tracker = SectionTracker::new(&IDS);
        tracker.observe(vec![vis("skills", 0.5)]);
        let changed = tracker.observe(vec![vis("skills", 0.0), vis("about", 0.0)]);
        assert_eq!(changed, None);
        assert_eq!(tracker.active(), "skills");
    }

    #[test]
    fn test_no_change_reported_for_same_winner() {
        let mut tracker = SectionTracker::new(&IDS);
        assert_eq!(tracker.observe(vec![vis("contact", 0.2)]), Some("contact"));
        assert_eq!(tracker.observe(vec![vis("contact", 0.35)]), None);
        assert_eq!(tracker.observe(vec![vis("contact", 0.5)]), None);
    }

    #[test]
    fn test_reports_merge_across_batches() {
        let mut tracker = SectionTracker::new(&IDS);
        tracker.observe(vec![vis("skills", 0.5)]);
        // a weaker section reporting alone must not steal the highlight
        assert_eq!(tracker.observe(vec![vis("projects", 0.2)]), None);
        assert_eq!(tracker.active(), "skills");
        // once skills drops out, projects takes over
        assert_eq!(tracker.observe(vec![vis("skills", 0.0)]), Some("projects"));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut tracker = SectionTracker::new(&IDS);
        assert_eq!(tracker.observe(vec![vis("hero", 1.0)]), None);
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn test_intersecting_flag_required() {
        let mut tracker = SectionTracker::new(&IDS);
        let stale = SectionVisibility::new("skills", false, 0.5, 0.0);
        assert_eq!(tracker.observe(vec![stale]), None);
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn test_tie_prefers_section_nearest_viewport_top() {
        let snapshot = vec![
            SectionVisibility::new("skills", true, 0.35, 240.0),
            SectionVisibility::new("projects", true, 0.35, -12.0),
        ];
        assert_eq!(select_active("about", &snapshot), "projects");

        let reversed = snapshot.into_iter().rev().collect::<Vec<_>>();
        assert_eq!(select_active("about", &reversed), "projects");
    }

    #[test]
    fn test_full_tie_prefers_earlier_section() {
        let snapshot = vec![
            SectionVisibility::new("skills", true, 0.35, 10.0),
            SectionVisibility::new("projects", true, 0.35, 10.0),
        ];
        assert_eq!(select_active("about", &snapshot), "skills");
    }

    #[test]
    fn test_retain_present_skips_missing_sections() {
        let mut tracker = SectionTracker::new(&IDS);
        tracker.retain_present(&["skills", "contact"]);
        assert_eq!(tracker.watched().collect::<Vec<_>>(), vec!["skills", "contact"]);
        // previous active was removed, so fall back to the first watched one
        assert_eq!(tracker.active(), "skills");
        assert_eq!(tracker.observe(vec![vis("about", 1.0)]), None);
    }

    #[test]
    fn test_retain_present_with_nothing_present_is_noop() {
        let mut tracker = SectionTracker::new(&IDS);
        tracker.retain_present(&[]);
        assert_eq!(tracker.watched().count(), IDS.len());
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn test_active_always_a_known_section() {
        let batches = vec![
            vec![vis("projects", 0.2), vis("bogus", 0.9)],
            vec![vis("projects", 0.0)],
            vec![],
            vec![vis("contact", 0.5), vis("about", 0.5)],
            vec![vis("contact", 0.0), vis("about", 0.0), vis("skills", 0.0)],
            vec![vis("achievements", 0.35)],
        ];
        let mut tracker = SectionTracker::new(&IDS);
        for batch in batches {
            tracker.observe(batch);
            assert!(IDS.contains(&tracker.active()));
        }
        assert_eq!(tracker.active(), "achievements");
    }

    #[test]
    fn test_selectors_one_per_section() {
        let mut tracker = SectionTracker::new(&IDS);
        assert_eq!(
            tracker.selectors(),
            ["#about", "#skills", "#achievements", "#projects", "#contact"]
        );

        tracker.retain_present(&["about", "contact"]);
        assert_eq!(tracker.selectors(), ["#about", "#contact"]);
        assert_eq!(tracker.watched().collect::<Vec<_>>(), ["about", "contact"]);
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }
}
