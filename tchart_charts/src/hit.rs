// Copyright 2026 the tchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click hit-testing.
//!
//! The orchestrator re-registers its clickable regions (legend swatches, the
//! empty-state reload affordance) on every draw, then resolves clicks
//! against them. Regions carry a plain action value rather than a closure so
//! dispatch does not alias the chart state it acts on.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// A registry of clickable rectangles and the actions they trigger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HitRegistry<A> {
    regions: Vec<(Rect, A)>,
}

impl<A: Clone + PartialEq> HitRegistry<A> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Registers a region. Later registrations stack over earlier ones but
    /// do not replace them.
    pub fn add(&mut self, rect: Rect, action: A) {
        self.regions.push((rect, action));
    }

    /// Removes every region registered with exactly this rectangle.
    pub fn remove(&mut self, rect: Rect) {
        self.regions.retain(|(r, _)| *r != rect);
    }

    /// Drops all regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no regions are registered.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns the actions of every region containing `point`, in
    /// registration order.
    pub fn dispatch(&self, point: Point) -> Vec<A> {
        self.regions
            .iter()
            .filter(|(rect, _)| rect.contains(point))
            .map(|(_, action)| action.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn dispatch_preserves_registration_order() {
        let mut hits = HitRegistry::new();
        hits.add(Rect::new(0.0, 0.0, 10.0, 10.0), "first");
        hits.add(Rect::new(5.0, 5.0, 15.0, 15.0), "second");
        hits.add(Rect::new(20.0, 20.0, 30.0, 30.0), "far");

        assert_eq!(hits.dispatch(Point::new(7.0, 7.0)), ["first", "second"]);
        assert_eq!(hits.dispatch(Point::new(1.0, 1.0)), ["first"]);
        assert!(hits.dispatch(Point::new(50.0, 50.0)).is_empty());
    }

    #[test]
    fn remove_matches_the_exact_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut hits = HitRegistry::new();
        hits.add(rect, 1);
        hits.add(rect, 2);
        hits.add(Rect::new(0.0, 0.0, 5.0, 5.0), 3);

        hits.remove(rect);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.dispatch(Point::new(1.0, 1.0)), [3]);

        hits.clear();
        assert!(hits.is_empty());
    }
}
