//! Scroll-proximity focus tracking for the project list.
//!
//! Pure geometry over measured rectangles - no DOM types in here. The
//! component layer measures the viewport and the rendered items, feeds the
//! rectangles in, and applies the resulting tiers back to the host through
//! a [`ViewportAdapter`].

/// Vertical slice of an element's bounding box. Horizontal position never
/// matters for focus selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Derived visibility/interactivity classification of an item relative to
/// the currently focused item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Focused,
    Adjacent,
    Dimmed,
}

impl Tier {
    pub fn opacity(self) -> f64 {
        match self {
            Tier::Focused => 1.0,
            Tier::Adjacent => 0.5,
            Tier::Dimmed => 0.0,
        }
    }

    pub fn interactive(self) -> bool {
        !matches!(self, Tier::Dimmed)
    }
}

/// Tier for `id` given the currently active id.
///
/// Adjacency is by id value (`active ± 1`), not by display position. The two
/// diverge if items are ever reordered or filtered; that is the behavior of
/// record, so it stays until the content model says otherwise.
pub fn tier_for(active: Option<u32>, id: u32) -> Tier {
    let Some(active) = active else {
        return Tier::Dimmed;
    };
    if id == active {
        Tier::Focused
    } else if id + 1 == active || id == active + 1 {
        Tier::Adjacent
    } else {
        Tier::Dimmed
    }
}

/// Scroll offset that centers `item` within `viewport`, given the current
/// scroll position. Rects are in the same coordinate space (client coords in
/// the DOM case).
pub fn centering_scroll_top(current_scroll_top: f64, viewport: Rect, item: Rect) -> f64 {
    current_scroll_top + item.top - viewport.top - viewport.height / 2.0 + item.height / 2.0
}

/// Host-side surface the tracker reads from and drives. Implemented over the
/// DOM in the component layer and over plain structs in tests.
pub trait ViewportAdapter {
    /// Bounding rect of the scroll container, `None` when it is not mounted.
    fn viewport(&self) -> Option<Rect>;
    /// Id and bounding rect of every currently rendered item.
    fn items(&self) -> Vec<(u32, Rect)>;
    /// Current scroll offset of the container.
    fn scroll_top(&self) -> f64;
    /// Set the scroll offset, smoothly animated when `animate` is true.
    fn scroll_to(&self, top: f64, animate: bool);
}

/// Tracks which item is closest to the viewport center.
///
/// One instance per scroll container; recreated with the container. Holds
/// only the active id - tiers are derived fresh via [`tier_for`] on every
/// read.
#[derive(Debug, Default)]
pub struct FocusTracker {
    active: Option<u32>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> Option<u32> {
        self.active
    }

    /// Explicit override, used once an animated scroll settles so transient
    /// mid-animation measurements can't leave the wrong item focused.
    pub fn set_active(&mut self, id: u32) {
        self.active = Some(id);
    }

    pub fn tier_of(&self, id: u32) -> Tier {
        tier_for(self.active, id)
    }

    /// Select the item whose center is nearest the viewport center.
    ///
    /// Ties resolve to the earliest item in input order. An empty input
    /// clears the selection.
    pub fn recompute(&mut self, viewport: Rect, items: &[(u32, Rect)]) -> Option<u32> {
        let center = viewport.center();
        let mut closest: Option<(u32, f64)> = None;
        for &(id, rect) in items {
            let distance = (rect.center() - center).abs();
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((id, distance));
            }
        }
        self.active = closest.map(|(id, _)| id);
        self.active
    }

    /// Re-measure through the adapter and reselect. Clears the selection
    /// when the viewport is gone or nothing is rendered.
    pub fn recompute_from<A: ViewportAdapter>(&mut self, adapter: &A) -> Option<u32> {
        match adapter.viewport() {
            Some(viewport) => {
                let items = adapter.items();
                self.recompute(viewport, &items)
            }
            None => {
                self.active = None;
                None
            }
        }
    }

    /// Start scrolling `id` to the viewport center.
    ///
    /// Returns the target offset when the scroll was issued; `None` (and no
    /// scroll) when the viewport or the item is missing. The caller is
    /// responsible for calling [`set_active`](Self::set_active) once the
    /// animation settles.
    pub fn focus_item<A: ViewportAdapter>(
        &mut self,
        adapter: &A,
        id: u32,
        animate: bool,
    ) -> Option<f64> {
        let viewport = adapter.viewport()?;
        let (_, item) = adapter.items().into_iter().find(|&(i, _)| i == id)?;
        let target = centering_scroll_top(adapter.scroll_top(), viewport, item);
        adapter.scroll_to(target, animate);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Adapter over fixed rects, recording scroll requests.
    struct FakeViewport {
        viewport: Option<Rect>,
        items: Vec<(u32, Rect)>,
        scroll_top: f64,
        scrolls: RefCell<Vec<(f64, bool)>>,
    }

    impl FakeViewport {
        fn new(viewport: Rect, items: Vec<(u32, Rect)>) -> Self {
            Self {
                viewport: Some(viewport),
                items,
                scroll_top: 0.0,
                scrolls: RefCell::new(Vec::new()),
            }
        }

        fn unmounted() -> Self {
            Self {
                viewport: None,
                items: Vec::new(),
                scroll_top: 0.0,
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ViewportAdapter for FakeViewport {
        fn viewport(&self) -> Option<Rect> {
            self.viewport
        }

        fn items(&self) -> Vec<(u32, Rect)> {
            self.items.clone()
        }

        fn scroll_top(&self) -> f64 {
            self.scroll_top
        }

        fn scroll_to(&self, top: f64, animate: bool) {
            self.scrolls.borrow_mut().push((top, animate));
        }
    }

    // Items sized so centers land at 390, 900, 1400 against a viewport
    // centered at 400.
    fn three_items() -> Vec<(u32, Rect)> {
        vec![
            (1, Rect::new(340.0, 100.0)),
            (2, Rect::new(850.0, 100.0)),
            (3, Rect::new(1350.0, 100.0)),
        ]
    }

    #[test]
    fn selects_item_nearest_viewport_center() {
        let mut tracker = FocusTracker::new();
        let active = tracker.recompute(Rect::new(0.0, 800.0), &three_items());
        assert_eq!(active, Some(1));
        assert_eq!(tracker.tier_of(1), Tier::Focused);
        assert_eq!(tracker.tier_of(2), Tier::Adjacent);
        assert_eq!(tracker.tier_of(3), Tier::Dimmed);
    }

    #[test]
    fn exactly_one_item_is_focused() {
        let mut tracker = FocusTracker::new();
        let items = three_items();
        tracker.recompute(Rect::new(0.0, 800.0), &items);
        let focused = items
            .iter()
            .filter(|(id, _)| tracker.tier_of(*id) == Tier::Focused)
            .count();
        assert_eq!(focused, 1);
    }

    #[test]
    fn tie_goes_to_earliest_item_in_input_order() {
        let mut tracker = FocusTracker::new();
        // Both centers sit at 500, equidistant from the viewport center 400.
        let items = vec![
            (7, Rect::new(450.0, 100.0)),
            (2, Rect::new(450.0, 100.0)),
        ];
        let active = tracker.recompute(Rect::new(0.0, 800.0), &items);
        assert_eq!(active, Some(7));
    }

    #[test]
    fn empty_input_clears_selection() {
        let mut tracker = FocusTracker::new();
        tracker.recompute(Rect::new(0.0, 800.0), &three_items());
        assert!(tracker.active_id().is_some());
        let active = tracker.recompute(Rect::new(0.0, 800.0), &[]);
        assert_eq!(active, None);
        assert_eq!(tracker.tier_of(1), Tier::Dimmed);
    }

    #[test]
    fn adjacency_is_by_id_value_not_position() {
        let mut tracker = FocusTracker::new();
        // Ids 1, 3, 5 rendered in order; 3 focused. Neither neighbor-by-id
        // (2 or 4) is present, so the visually adjacent items stay dimmed.
        let items = vec![
            (1, Rect::new(0.0, 100.0)),
            (3, Rect::new(350.0, 100.0)),
            (5, Rect::new(700.0, 100.0)),
        ];
        tracker.recompute(Rect::new(0.0, 800.0), &items);
        assert_eq!(tracker.active_id(), Some(3));
        assert_eq!(tracker.tier_of(1), Tier::Dimmed);
        assert_eq!(tracker.tier_of(5), Tier::Dimmed);
        assert_eq!(tracker.tier_of(2), Tier::Adjacent);
        assert_eq!(tracker.tier_of(4), Tier::Adjacent);
    }

    #[test]
    fn no_tier_is_adjacent_before_first_measurement() {
        let tracker = FocusTracker::new();
        assert_eq!(tracker.active_id(), None);
        for id in 0..5 {
            assert_eq!(tracker.tier_of(id), Tier::Dimmed);
        }
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut tracker = FocusTracker::new();
        let items = three_items();
        let viewport = Rect::new(0.0, 800.0);
        let first = tracker.recompute(viewport, &items);
        let tiers_first: Vec<_> = items.iter().map(|(id, _)| tracker.tier_of(*id)).collect();
        let second = tracker.recompute(viewport, &items);
        let tiers_second: Vec<_> = items.iter().map(|(id, _)| tracker.tier_of(*id)).collect();
        assert_eq!(first, second);
        assert_eq!(tiers_first, tiers_second);
    }

    #[test]
    fn tier_opacity_and_interactivity() {
        assert_eq!(Tier::Focused.opacity(), 1.0);
        assert_eq!(Tier::Adjacent.opacity(), 0.5);
        assert_eq!(Tier::Dimmed.opacity(), 0.0);
        assert!(Tier::Focused.interactive());
        assert!(Tier::Adjacent.interactive());
        assert!(!Tier::Dimmed.interactive());
    }

    #[test]
    fn centering_scroll_top_matches_reference_geometry() {
        // Scrolled to top, item 3 at top=1200 height=100, viewport height 800.
        let target = centering_scroll_top(0.0, Rect::new(0.0, 800.0), Rect::new(1200.0, 100.0));
        assert_eq!(target, 850.0);
    }

    #[test]
    fn focus_item_issues_centering_scroll() {
        let mut tracker = FocusTracker::new();
        let fake = FakeViewport::new(
            Rect::new(0.0, 800.0),
            vec![(3, Rect::new(1200.0, 100.0))],
        );
        let target = tracker.focus_item(&fake, 3, true);
        assert_eq!(target, Some(850.0));
        assert_eq!(*fake.scrolls.borrow(), vec![(850.0, true)]);
    }

    #[test]
    fn focus_item_is_noop_for_missing_item() {
        let mut tracker = FocusTracker::new();
        let fake = FakeViewport::new(Rect::new(0.0, 800.0), three_items());
        assert_eq!(tracker.focus_item(&fake, 42, true), None);
        assert!(fake.scrolls.borrow().is_empty());
    }

    #[test]
    fn focus_item_is_noop_when_viewport_unmounted() {
        let mut tracker = FocusTracker::new();
        let fake = FakeViewport::unmounted();
        assert_eq!(tracker.focus_item(&fake, 1, false), None);
        assert!(fake.scrolls.borrow().is_empty());
    }

    #[test]
    fn recompute_from_unmounted_viewport_clears_selection() {
        let mut tracker = FocusTracker::new();
        tracker.set_active(2);
        assert_eq!(tracker.recompute_from(&FakeViewport::unmounted()), None);
        assert_eq!(tracker.active_id(), None);
    }

    #[test]
    fn explicit_set_active_survives_settled_remeasurement() {
        let mut tracker = FocusTracker::new();
        let fake = FakeViewport::new(Rect::new(0.0, 800.0), three_items());
        tracker.recompute_from(&fake);
        assert_eq!(tracker.active_id(), Some(1));

        // Programmatic focus on 3: scroll is issued, the settle callback
        // overrides the active id, and a re-measurement at the settled
        // geometry agrees with the override.
        let target = tracker.focus_item(&fake, 3, true).unwrap();
        tracker.set_active(3);
        assert_eq!(tracker.active_id(), Some(3));

        let settled: Vec<_> = fake
            .items
            .iter()
            .map(|&(id, r)| (id, Rect::new(r.top - target, r.height)))
            .collect();
        let settled_fake = FakeViewport::new(Rect::new(0.0, 800.0), settled);
        assert_eq!(tracker.recompute_from(&settled_fake), Some(3));
    }
}
