//! Collision-specific debug colouring

use crate::foundation::math::Vec3;

/// Accumulates one entity's pairwise collision results into a box colour
///
/// Red goes to 1.0 as soon as any pair overlaps and green goes to 1.0 as soon
/// as any pair does not. An entity that overlaps some neighbours and misses
/// others ends up yellow; an entity with no neighbours stays black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionColor {
    overlapped: bool,
    missed: bool,
}

impl CollisionColor {
    /// Start with no recorded tests (black)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one pairwise test
    pub fn record(&mut self, overlap: bool) {
        if overlap {
            self.overlapped = true;
        } else {
            self.missed = true;
        }
    }

    /// Whether any recorded test overlapped
    pub fn any_overlap(&self) -> bool {
        self.overlapped
    }

    /// Resulting rgb colour
    pub fn rgb(&self) -> Vec3 {
        Vec3::new(
            if self.overlapped { 1.0 } else { 0.0 },
            if self.missed { 1.0 } else { 0.0 },
            0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tests_is_black() {
        assert_eq!(CollisionColor::new().rgb(), Vec3::zeros());
    }

    #[test]
    fn test_only_overlaps_is_red() {
        let mut color = CollisionColor::new();
        color.record(true);
        color.record(true);

        assert_eq!(color.rgb(), Vec3::new(1.0, 0.0, 0.0));
        assert!(color.any_overlap());
    }

    #[test]
    fn test_only_misses_is_green() {
        let mut color = CollisionColor::new();
        color.record(false);

        assert_eq!(color.rgb(), Vec3::new(0.0, 1.0, 0.0));
        assert!(!color.any_overlap());
    }

    #[test]
    fn test_mixed_results_set_both_channels() {
        let mut color = CollisionColor::new();
        color.record(true);
        color.record(false);

        assert_eq!(color.rgb(), Vec3::new(1.0, 1.0, 0.0));
    }
}
