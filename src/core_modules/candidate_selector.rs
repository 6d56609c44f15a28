// THEORY:
// The `candidate_selector` is the decision stage of the pipeline. Given the
// hull candidates the collector produced, it scores each one with the
// `circularity` module and keeps the one with the smallest error.
//
// Key architectural principles:
// 1.  **Sentinel start, strict improvement**: the running error starts at the
//     "not yet computed" sentinel of -1, so the first candidate is always
//     accepted. Later candidates replace the winner only on a strictly
//     smaller error, which means ties keep the earliest-seen candidate. The
//     collector hands hulls over largest-first, so among equally circular
//     shapes the biggest one wins.
// 2.  **Debug annotation**: the higher-level selection operation draws every
//     candidate's edges onto the working frame in one color and then
//     re-draws the winner in another, so a developer looking at the frame
//     stream can see both what was considered and what won. Hulls are open
//     polylines; the closing edge is never drawn.
// 3.  **Ownership transfer**: the annotating operation consumes the
//     candidate list. The winner is moved out and returned; every other hull
//     is dropped before the call returns.

use log::debug;

use crate::core_modules::circularity::circularity;
use crate::core_modules::hull_collector::hull_collector;
use crate::core_modules::image_ops::{ConvexHull, ImageOps, ImageTransform};

/// Overlay color for every candidate hull's edges.
const CANDIDATE_HULL_COLOR: [u8; 3] = [0x80, 0x60, 0xff];
/// Overlay color the winning hull is re-drawn with.
const WINNING_HULL_COLOR: [u8; 3] = [0x80, 0x10, 0x10];
/// Line thickness of the hull overlays, in pixels.
const HULL_LINE_THICKNESS: u32 = 3;

pub mod candidate_selector {
    use super::*;

    /// Scores every hull and returns the index of the one closest to a
    /// circle, together with its circularity error. An empty candidate list
    /// yields `(None, -1)`; ties keep the earliest-seen candidate.
    pub fn convex_hull_closest_to_circle(convex_hulls: &[ConvexHull]) -> (Option<usize>, i64) {
        let mut error = -1i64;
        let mut best_index: Option<usize> = None;

        for (index, convex_hull) in convex_hulls.iter().enumerate() {
            let dimensions = circularity::calculate_hull_dimensions(convex_hull);
            let current_error = circularity::circle_circumference_error(convex_hull, &dimensions);

            if current_error < error || error < 0 {
                error = current_error;
                best_index = Some(index);
            }
        }

        (best_index, error)
    }

    /// Collects hull candidates from the binary image, annotates the frame
    /// with every candidate and the winner (a debug side effect), and
    /// returns the hull closest to a circle. All non-winning hulls are
    /// dropped before returning; `None` means no candidate qualified.
    pub fn best_convex_hull<O: ImageOps>(
        ops: &O,
        binary_image: &mut [u8],
        image_width: u32,
        image_height: u32,
        max_candidates: u8,
        transform: ImageTransform,
    ) -> Option<ConvexHull> {
        let mut convex_hulls = hull_collector::extract_convex_hulls_of_largest_objects(
            ops,
            binary_image,
            image_width,
            image_height,
            max_candidates,
            transform,
        );

        if convex_hulls.is_empty() {
            return None;
        }

        for convex_hull in &convex_hulls {
            draw_hull(
                ops,
                binary_image,
                image_width,
                image_height,
                convex_hull,
                transform,
                CANDIDATE_HULL_COLOR,
            );
        }

        let (best_index, error) = convex_hull_closest_to_circle(&convex_hulls);
        let best_index = best_index?;
        debug!(
            "selected hull {best_index} of {} with circularity error {error}",
            convex_hulls.len()
        );

        let winner = convex_hulls.swap_remove(best_index);
        draw_hull(
            ops,
            binary_image,
            image_width,
            image_height,
            &winner,
            transform,
            WINNING_HULL_COLOR,
        );

        // The remaining candidates drop here.
        Some(winner)
    }

    /// Draws the hull's edges as an open polyline onto the image buffer.
    fn draw_hull<O: ImageOps>(
        ops: &O,
        binary_image: &mut [u8],
        image_width: u32,
        image_height: u32,
        convex_hull: &ConvexHull,
        transform: ImageTransform,
        color: [u8; 3],
    ) {
        for edge in convex_hull.windows(2) {
            ops.draw_line(
                binary_image,
                image_width,
                image_height,
                edge[0],
                edge[1],
                transform,
                HULL_LINE_THICKNESS,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::candidate_selector::*;
    use super::{CANDIDATE_HULL_COLOR, WINNING_HULL_COLOR};
    use crate::core_modules::image_ops::identity_transform;
    use crate::core_modules::image_ops::test_ops::MockOps;
    use crate::core_modules::object_details::Point;

    fn hull_of(points: &[(u32, u32)]) -> Vec<Point> {
        points.iter().map(|&(x, y)| Point { x, y }).collect()
    }

    #[test]
    fn first_minimal_error_wins_ties() {
        // Axis-aligned squares all score the same circularity error, and
        // flattened rectangles score strictly worse. With errors shaped like
        // [high, e, e, higher], the first minimal candidate must win.
        let hulls = vec![
            hull_of(&[(0, 0), (40, 0), (40, 4), (0, 4)]),
            hull_of(&[(0, 0), (10, 0), (10, 10), (0, 10)]),
            hull_of(&[(20, 20), (40, 20), (40, 40), (20, 40)]),
            hull_of(&[(0, 0), (60, 0), (60, 2), (0, 2)]),
        ];

        let (best_index, error) = convex_hull_closest_to_circle(&hulls);
        assert_eq!(best_index, Some(1));
        assert_eq!(error, 12);
    }

    #[test]
    fn empty_candidate_list_yields_sentinel_error() {
        let (best_index, error) = convex_hull_closest_to_circle(&[]);
        assert_eq!(best_index, None);
        assert_eq!(error, -1);
    }

    #[test]
    fn single_candidate_is_always_accepted() {
        let hulls = vec![hull_of(&[(0, 0), (60, 0), (60, 2), (0, 2)])];

        let (best_index, error) = convex_hull_closest_to_circle(&hulls);
        assert_eq!(best_index, Some(0));
        assert!(error >= 0);
    }

    #[test]
    fn best_hull_is_selected_and_frame_is_annotated() {
        // One 8x8 block and one 16x3 block in a 40x20 frame; both pass the
        // 4 px size gate, the square-ish block should win.
        let mut map = vec![0u16; 40 * 20];
        for y in 0..8 {
            for x in 0..8 {
                map[y * 40 + x] = 1;
            }
        }
        for y in 12..15 {
            for x in 20..36 {
                map[y * 40 + x] = 2;
            }
        }
        let ops = MockOps::with_map(map, 2);
        let mut image = vec![0u8; 800];

        let winner = best_convex_hull(&ops, &mut image, 40, 20, 4, &identity_transform)
            .expect("a winner should be selected");

        // The mock passes point sets through as hulls, so the 8x8 block
        // comes back as its 64 pixels.
        assert_eq!(winner.len(), 64);
        assert!(winner.contains(&Point { x: 7, y: 7 }));

        // Every candidate was annotated, then the winner re-drawn on top.
        let lines = ops.drawn_lines.borrow();
        let candidate_lines = lines.iter().filter(|l| l.2 == CANDIDATE_HULL_COLOR).count();
        let winner_lines = lines.iter().filter(|l| l.2 == WINNING_HULL_COLOR).count();
        assert_eq!(candidate_lines, 63 + 47);
        assert_eq!(winner_lines, 63);
        assert_eq!(lines.last().map(|l| l.2), Some(WINNING_HULL_COLOR));
    }

    #[test]
    fn empty_frame_yields_no_winner() {
        let ops = MockOps::without_map();
        let mut image = vec![0u8; 800];

        let winner = best_convex_hull(&ops, &mut image, 40, 20, 4, &identity_transform);
        assert!(winner.is_none());
    }
}
