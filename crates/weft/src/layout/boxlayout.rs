use geom::{Axis, Expanse, Rect};

use super::{Constraint, Layout, SizeSpec, desired_size};
use crate::canvas::Canvas;

/// A child's extents along the layout's main axis, after resolving its
/// size constraint. `Fixed` and `Percentage` pin all three values;
/// `Preferred` pins the ceiling at the child's preference; everything
/// else keeps the child's own hard max as the ceiling, so unconstrained
/// and `Fill` children alike absorb leftover space.
#[derive(Debug, Clone, Copy)]
struct Extent {
    min: u64,
    pref: u64,
    max: u64,
}

/// Stacks children along one axis. Each child spans the container's full
/// cross extent.
///
/// The main-axis distribution runs in one of three regimes:
/// - combined minimums exceed the container: every child shrinks in
///   proportion to its minimum share;
/// - combined preferences fit: minimums are granted, then leftover space
///   is handed out in equal per-child increments, skipping children at
///   their ceiling, until nothing remains or nothing can absorb more;
/// - preferences overflow but minimums fit: proportional split against
///   preference weights.
/// In the proportional regimes every share rounds to nearest except the
/// last participant, which takes the exact remainder, so the distributed
/// sum always equals the available space.
pub struct BoxLayout {
    pub axis: Axis,
}

impl BoxLayout {
    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
        }
    }

    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
        }
    }

    fn main(&self, e: Expanse) -> u32 {
        match self.axis {
            Axis::Horizontal => e.w,
            Axis::Vertical => e.h,
        }
    }

    fn cross(&self, e: Expanse) -> u32 {
        match self.axis {
            Axis::Horizontal => e.h,
            Axis::Vertical => e.w,
        }
    }

    fn extent(&self, child: &dyn Canvas, avail: u32) -> Extent {
        let min = u64::from(self.main(child.min_size()));
        let max = u64::from(self.main(child.max_size()));
        match child.constraint() {
            Some(Constraint::Size(SizeSpec::Fixed(n))) => {
                let n = u64::from(n);
                Extent {
                    min: n,
                    pref: n,
                    max: n,
                }
            }
            Some(Constraint::Size(SizeSpec::Percentage(p))) => {
                let n = (u64::from(avail) * u64::from(p) + 50) / 100;
                Extent {
                    min: n,
                    pref: n,
                    max: n,
                }
            }
            Some(Constraint::Size(SizeSpec::Fill)) => Extent { min, pref: min, max },
            Some(Constraint::Size(SizeSpec::Preferred)) => {
                let pref = u64::from(self.main(desired_size(child)));
                Extent {
                    min,
                    pref,
                    max: pref.max(min),
                }
            }
            _ => {
                let pref = u64::from(self.main(desired_size(child)));
                Extent {
                    min,
                    pref,
                    max: max.max(min),
                }
            }
        }
    }

    /// Split `avail` across `weights` proportionally, rounding each share
    /// to nearest, with the last participant absorbing the remainder.
    fn proportional(avail: u32, weights: &[u64]) -> Vec<u64> {
        let total: u64 = weights.iter().sum();
        let avail = u64::from(avail);
        let mut out = vec![0u64; weights.len()];
        let mut spent = 0u64;
        for (i, &w) in weights.iter().enumerate() {
            if i + 1 == weights.len() {
                out[i] = avail - spent;
            } else {
                let share = if total == 0 {
                    0
                } else {
                    (avail * w + total / 2) / total
                };
                // Earlier rounding can overshoot; never hand out more than
                // remains.
                out[i] = share.min(avail - spent);
                spent += out[i];
            }
        }
        out
    }

    fn distribute(&self, avail: u32, extents: &[Extent]) -> Vec<u64> {
        let sum_min: u64 = extents.iter().map(|e| e.min).sum();
        let sum_pref: u64 = extents.iter().map(|e| e.pref).sum();

        if sum_min > u64::from(avail) {
            let weights: Vec<u64> = extents.iter().map(|e| e.min).collect();
            return Self::proportional(avail, &weights);
        }
        if sum_pref > u64::from(avail) {
            let weights: Vec<u64> = extents.iter().map(|e| e.pref).collect();
            return Self::proportional(avail, &weights);
        }

        // Grant minimums, then hand out the surplus in equal per-child
        // increments, skipping children at their ceiling.
        let mut sizes: Vec<u64> = extents.iter().map(|e| e.min).collect();
        let mut left = u64::from(avail) - sum_min;
        while left > 0 {
            let active = sizes
                .iter()
                .zip(extents)
                .filter(|(s, e)| **s < e.max)
                .count() as u64;
            if active == 0 {
                break;
            }
            let inc = (left / active).max(1);
            let mut progressed = false;
            for (s, e) in sizes.iter_mut().zip(extents) {
                if left == 0 {
                    break;
                }
                let give = inc.min(e.max - *s).min(left);
                if give > 0 {
                    *s += give;
                    left -= give;
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
        }
        sizes
    }
}

impl Layout for BoxLayout {
    fn layout_children(&mut self, area: Expanse, children: &mut [Box<dyn Canvas>]) {
        let avail = self.main(area);
        let visible: Vec<usize> = (0..children.len())
            .filter(|&i| children[i].visible())
            .collect();
        let extents: Vec<Extent> = visible
            .iter()
            .map(|&i| self.extent(children[i].as_ref(), avail))
            .collect();
        let sizes = self.distribute(avail, &extents);

        let mut pos = 0u32;
        for (&i, &sz) in visible.iter().zip(&sizes) {
            let main = u32::try_from(sz).unwrap_or(u32::MAX);
            let child = children[i].as_mut();
            let r = match self.axis {
                Axis::Horizontal => Rect::new(pos, 0, main, area.h),
                Axis::Vertical => Rect::new(0, pos, area.w, main),
            };
            // Clamp is hard even when the distribution asked for less than
            // the child's minimum; stacking advances by the clamped size.
            let clamped = child.state().clamp_size(r.expanse());
            child.set_position(r.tl);
            child.set_size(clamped);
            pos = pos.saturating_add(self.main(clamped));
        }
    }

    fn preferred_size(&self, area: Expanse, children: &[Box<dyn Canvas>]) -> Expanse {
        let avail = self.main(area);
        let mut main = 0u64;
        let mut cross = 0u32;
        for child in children.iter().filter(|c| c.visible()) {
            main += self.extent(child.as_ref(), avail).pref;
            cross = cross.max(self.cross(desired_size(child.as_ref())));
        }
        let main = u32::try_from(main).unwrap_or(u32::MAX);
        match self.axis {
            Axis::Horizontal => Expanse::new(main, cross),
            Axis::Vertical => Expanse::new(cross, main),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::Block;
    use super::*;
    use geom::Point;

    fn constrained(w: u32, h: u32, spec: SizeSpec) -> Box<dyn Canvas> {
        let mut b = Block::sized(w, h);
        b.set_constraint(Some(Constraint::Size(spec)));
        b
    }

    #[test]
    fn fixed_and_fill_horizontal() {
        let mut children = vec![
            constrained(0, 0, SizeSpec::Fixed(4)),
            constrained(0, 0, SizeSpec::Fill),
        ];
        BoxLayout::horizontal().layout_children(Expanse::new(10, 3), &mut children);
        assert_eq!(children[0].rect(), Rect::new(0, 0, 4, 3));
        assert_eq!(children[1].rect(), Rect::new(4, 0, 6, 3));
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        let mut children = vec![
            constrained(0, 0, SizeSpec::Percentage(25)),
            constrained(0, 0, SizeSpec::Fill),
        ];
        BoxLayout::horizontal().layout_children(Expanse::new(10, 1), &mut children);
        // 25% of 10 rounds to 3 with nearest-integer rounding of 2.5.
        assert_eq!(children[0].rect().w, 3);
        assert_eq!(children[1].rect().w, 7);
    }

    #[test]
    fn preferred_overflow_splits_proportionally() {
        let mut children = vec![Block::sized(6, 1), Block::sized(3, 1)];
        BoxLayout::horizontal().layout_children(Expanse::new(6, 1), &mut children);
        // Weights 6:3 against 6 cells; first rounds to 4, last takes the
        // remainder.
        assert_eq!(children[0].rect().w, 4);
        assert_eq!(children[1].rect().w, 2);
        assert_eq!(children[1].rect().tl, Point::new(4, 0));
    }

    #[test]
    fn shrink_below_minimums_is_proportional() {
        let mut children = vec![
            Block::with_bounds(0, 0, Expanse::new(6, 1), Expanse::new(u32::MAX, u32::MAX)),
            Block::with_bounds(0, 0, Expanse::new(2, 1), Expanse::new(u32::MAX, u32::MAX)),
        ];
        BoxLayout::horizontal().layout_children(Expanse::new(4, 1), &mut children);
        // Distribution wants 3:1 but the hard min clamp pulls each child
        // back up; stacking still follows the clamped sizes.
        assert_eq!(children[0].rect().w, 6);
        assert_eq!(children[1].rect().w, 2);
        assert_eq!(children[1].rect().tl, Point::new(6, 0));
    }

    #[test]
    fn fill_children_share_surplus_equally() {
        let mut children = vec![
            constrained(0, 0, SizeSpec::Fill),
            constrained(0, 0, SizeSpec::Fill),
            constrained(0, 0, SizeSpec::Fill),
        ];
        BoxLayout::vertical().layout_children(Expanse::new(5, 9), &mut children);
        for (i, c) in children.iter().enumerate() {
            assert_eq!(c.rect(), Rect::new(0, 3 * i as u32, 5, 3));
        }
    }

    #[test]
    fn fill_respects_max() {
        let mut children = vec![
            {
                let mut b = Block::with_bounds(0, 0, Expanse::new(0, 0), Expanse::new(3, u32::MAX));
                b.set_constraint(Some(Constraint::Size(SizeSpec::Fill)));
                b
            },
            constrained(0, 0, SizeSpec::Fill),
        ];
        BoxLayout::horizontal().layout_children(Expanse::new(10, 1), &mut children);
        assert_eq!(children[0].rect().w, 3);
        assert_eq!(children[1].rect().w, 7);
    }

    #[test]
    fn surplus_grows_unconstrained_children_past_preference() {
        let mut children = vec![Block::sized(3, 1), Block::sized(3, 1)];
        BoxLayout::horizontal().layout_children(Expanse::new(10, 1), &mut children);
        // Preference is a starting point, not a cap; the surplus splits
        // equally and nothing is left unassigned.
        assert_eq!(children[0].rect().w, 5);
        assert_eq!(children[1].rect().w, 5);
        assert_eq!(children[1].rect().tl, Point::new(5, 0));
    }

    #[test]
    fn preferred_constraint_pins_the_ceiling() {
        let mut children = vec![
            constrained(3, 1, SizeSpec::Preferred),
            Block::sized(3, 1),
        ];
        BoxLayout::horizontal().layout_children(Expanse::new(10, 1), &mut children);
        assert_eq!(children[0].rect().w, 3);
        assert_eq!(children[1].rect().w, 7);
    }

    #[test]
    fn surplus_stops_at_hard_max() {
        let mut children = vec![
            Block::with_bounds(2, 1, Expanse::new(0, 0), Expanse::new(4, u32::MAX)),
            Block::sized(2, 1),
        ];
        BoxLayout::horizontal().layout_children(Expanse::new(10, 1), &mut children);
        assert_eq!(children[0].rect().w, 4);
        assert_eq!(children[1].rect().w, 6);
    }

    #[test]
    fn invisible_children_untouched() {
        let mut children = vec![constrained(0, 0, SizeSpec::Fill), Block::sized(2, 2)];
        children[1].set_visible(false);
        children[1].set_position(Point::new(7, 7));
        BoxLayout::horizontal().layout_children(Expanse::new(10, 3), &mut children);
        assert_eq!(children[0].rect().w, 10);
        assert_eq!(children[1].rect(), Rect::new(7, 7, 2, 2));
    }

    #[test]
    fn exact_sum_when_preferences_overflow() {
        let mut children = vec![Block::sized(5, 1), Block::sized(5, 1), Block::sized(5, 1)];
        BoxLayout::horizontal().layout_children(Expanse::new(11, 1), &mut children);
        let total: u32 = children.iter().map(|c| c.rect().w).sum();
        assert_eq!(total, 11);
    }

    #[test]
    fn preferred_sums_main_axis() {
        let children = vec![Block::sized(3, 2), Block::sized(4, 1)];
        let pref = BoxLayout::horizontal().preferred_size(Expanse::new(100, 100), &children);
        assert_eq!(pref, Expanse::new(7, 2));
    }
}
