use geom::{Expanse, Rect};

use super::{Anchor, Constraint, Layout, Position, assign, desired_size};
use crate::canvas::Canvas;

/// Which edge of the container a child is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    North,
    South,
    West,
    East,
    Center,
}

/// Docks children to the container's edges, with the remainder going to the
/// center. The region comes from the child's position constraint: `Top` and
/// `Bottom` anchors dock north and south at preferred height, `Left` and
/// `Right` dock west and east at preferred width, and everything else
/// (including unconstrained children) fills the center.
///
/// North and south claim the full container width; west and east claim the
/// band left between them. Several children docked to the same edge stack
/// inward in child order.
pub struct BorderLayout;

fn region(child: &dyn Canvas) -> Region {
    match child.constraint() {
        Some(Constraint::Position(Position::Anchor(a))) => match a {
            Anchor::Top => Region::North,
            Anchor::Bottom => Region::South,
            Anchor::Left => Region::West,
            Anchor::Right => Region::East,
            _ => Region::Center,
        },
        _ => Region::Center,
    }
}

impl Layout for BorderLayout {
    fn layout_children(&mut self, area: Expanse, children: &mut [Box<dyn Canvas>]) {
        let mut top = 0u32;
        let mut bottom = area.h;
        let mut left = 0u32;
        let mut right = area.w;

        for child in children.iter_mut() {
            if !child.visible() {
                continue;
            }
            match region(child.as_ref()) {
                Region::North => {
                    let h = desired_size(child.as_ref()).h.min(bottom - top);
                    assign(child.as_mut(), Rect::new(0, top, area.w, h));
                    top += h;
                }
                Region::South => {
                    let h = desired_size(child.as_ref()).h.min(bottom - top);
                    assign(child.as_mut(), Rect::new(0, bottom - h, area.w, h));
                    bottom -= h;
                }
                _ => {}
            }
        }
        for child in children.iter_mut() {
            if !child.visible() {
                continue;
            }
            match region(child.as_ref()) {
                Region::West => {
                    let w = desired_size(child.as_ref()).w.min(right - left);
                    assign(child.as_mut(), Rect::new(left, top, w, bottom - top));
                    left += w;
                }
                Region::East => {
                    let w = desired_size(child.as_ref()).w.min(right - left);
                    assign(child.as_mut(), Rect::new(right - w, top, w, bottom - top));
                    right -= w;
                }
                _ => {}
            }
        }
        let center = Rect::new(left, top, right - left, bottom - top);
        for child in children.iter_mut() {
            if child.visible() && region(child.as_ref()) == Region::Center {
                assign(child.as_mut(), center);
            }
        }
    }

    fn preferred_size(&self, _area: Expanse, children: &[Box<dyn Canvas>]) -> Expanse {
        // Horizontal bands stack in height, side bands add to the middle
        // row's width.
        let mut band_h = 0u32;
        let mut band_w = 0u32;
        let mut side_w = 0u32;
        let mut mid_h = 0u32;
        let mut center = Expanse::new(0, 0);
        for child in children.iter().filter(|c| c.visible()) {
            let sz = desired_size(child.as_ref());
            match region(child.as_ref()) {
                Region::North | Region::South => {
                    band_h += sz.h;
                    band_w = band_w.max(sz.w);
                }
                Region::West | Region::East => {
                    side_w += sz.w;
                    mid_h = mid_h.max(sz.h);
                }
                Region::Center => {
                    center.w = center.w.max(sz.w);
                    center.h = center.h.max(sz.h);
                }
            }
        }
        Expanse::new(
            band_w.max(side_w + center.w),
            band_h + mid_h.max(center.h),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::Block;
    use super::*;
    use geom::Point;

    fn docked(w: u32, h: u32, a: Anchor) -> Box<dyn Canvas> {
        let mut b = Block::sized(w, h);
        b.set_constraint(Some(Constraint::Position(Position::Anchor(a))));
        b
    }

    #[test]
    fn edges_and_center() {
        let mut children = vec![
            docked(0, 2, Anchor::Top),
            docked(0, 1, Anchor::Bottom),
            docked(5, 0, Anchor::Left),
            Block::sized(0, 0),
        ];
        BorderLayout.layout_children(Expanse::new(20, 10), &mut children);
        assert_eq!(children[0].rect(), Rect::new(0, 0, 20, 2));
        assert_eq!(children[1].rect(), Rect::new(0, 9, 20, 1));
        assert_eq!(children[2].rect(), Rect::new(0, 2, 5, 7));
        assert_eq!(children[3].rect(), Rect::new(5, 2, 15, 7));
    }

    #[test]
    fn same_edge_stacks_inward() {
        let mut children = vec![docked(0, 2, Anchor::Top), docked(0, 3, Anchor::Top)];
        BorderLayout.layout_children(Expanse::new(10, 10), &mut children);
        assert_eq!(children[0].rect().tl, Point::new(0, 0));
        assert_eq!(children[1].rect().tl, Point::new(0, 2));
    }

    #[test]
    fn edges_never_overrun_container() {
        let mut children = vec![docked(0, 8, Anchor::Top), docked(0, 8, Anchor::Bottom)];
        BorderLayout.layout_children(Expanse::new(10, 10), &mut children);
        assert_eq!(children[0].rect().h, 8);
        assert_eq!(children[1].rect().h, 2);
    }

    #[test]
    fn preferred_sums_bands() {
        let children = vec![
            docked(4, 2, Anchor::Top),
            docked(3, 5, Anchor::Left),
            {
                let mut b = Block::sized(6, 4);
                b.set_constraint(Some(Constraint::Position(Position::Anchor(Anchor::Center))));
                b
            },
        ];
        let pref = BorderLayout.preferred_size(Expanse::new(0, 0), &children);
        assert_eq!(pref, Expanse::new(9, 7));
    }
}
