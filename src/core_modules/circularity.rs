// THEORY:
// The `circularity` module is the analytical heart of the classification
// stage. Given a convex hull it answers two questions: how big is this shape
// (bounding dimensions and center), and how far is it from an idealized
// circle of the same size?
//
// Key architectural principles & algorithm steps:
// 1.  **Angular sampling**: instead of integrating over the whole
//     circumference, the scorer places 12 probe points on an ideal circle
//     (one every `ANGLE_INCREMENT` radians) whose radius is the average of
//     the hull's half-width and half-height, centered on the hull's bounding
//     center.
// 2.  **Manhattan metric**: each probe is compared to the hull points using
//     Manhattan distance. It is faster than Euclidean and does not affect
//     the outcome since the scale of the error is arbitrary.
// 3.  **Normalization**: raw distances are divided by the hull's mean extent
//     `(width + height) / 2` so the score is comparable across differently
//     sized candidates, then scaled by the integer aspect ratio
//     `width / height` so flattened shapes are penalized.
// 4.  **Per-probe aggregation**: for each probe the loop keeps the largest
//     normalized distance over the hull points and adds it to the running
//     total. The total over all probes is the circularity error; lower means
//     more circle-like. The score is only meaningful when the hull encloses
//     the whole object; a hull covering e.g. half of a ball produces an
//     unreliable error.
// 5.  **Rectangular containment**: the same bounding dimensions also back a
//     cheap containment test, used by trackers to ask whether a measured
//     object center still falls inside a previously detected hull window.

use std::f64::consts::PI;

use crate::core_modules::image_ops::ConvexHull;
use crate::core_modules::object_details::{ObjectDetails, Point};

const TWO_PI: f64 = PI * 2.0;
/// Angular distance between two probe points, roughly 1/6 * pi (12 probes
/// per full turn).
const ANGLE_INCREMENT: f64 = 0.1667 * PI;

/// Bounding dimensions and center of a convex hull, as computed by
/// `calculate_hull_dimensions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HullDimensions {
    pub width: u32,
    pub height: u32,
    pub center: Point,
}

pub mod circularity {
    use super::*;

    /// Calculates the bounding width, height and center point of the given
    /// convex hull. A hull with fewer than two points is degenerate and
    /// yields zeroed dimensions.
    pub fn calculate_hull_dimensions(convex_hull: &ConvexHull) -> HullDimensions {
        if convex_hull.len() < 2 {
            return HullDimensions::default();
        }

        let first = convex_hull[0];
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;

        for point in &convex_hull[1..] {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        HullDimensions {
            width: max_x - min_x,
            height: max_y - min_y,
            center: Point {
                x: (max_x + min_x) / 2,
                y: (max_y + min_y) / 2,
            },
        }
    }

    /// Packs a hull's bounding dimensions into an `ObjectDetails` record, so
    /// downstream consumers can treat a detected hull like a measured object.
    /// `id` and `area` are left at zero.
    pub fn hull_dimensions_as_details(convex_hull: &ConvexHull) -> ObjectDetails {
        let dimensions = calculate_hull_dimensions(convex_hull);

        ObjectDetails {
            width: dimensions.width,
            height: dimensions.height,
            center_x: dimensions.center.x,
            center_y: dimensions.center.y,
            ..ObjectDetails::default()
        }
    }

    /// Scores the given hull against an idealized circle of the same size.
    /// Takes probe points on the ideal circle's circumference and compares
    /// each of them against the hull's points, accumulating the largest
    /// normalized Manhattan distance per probe. Lower totals are more
    /// circle-like; the scale is arbitrary.
    pub fn circle_circumference_error(
        convex_hull: &ConvexHull,
        dimensions: &HullDimensions,
    ) -> i64 {
        let width = i64::from(dimensions.width);
        let height = i64::from(dimensions.height);
        let radius = ((dimensions.width + dimensions.height) as f64 / 4.0).round() as u32;
        // Mean extent of the hull; zero only for degenerate hulls, in which
        // case normalization is skipped rather than dividing by zero.
        let normalizer = (width + height) / 2;
        let mut total_error = 0i64;

        let mut angle = 0.0f64;
        while angle < TWO_PI {
            let probe = point_on_circumference(dimensions.center, radius, angle);
            let mut point_error = -1i64;

            for point in convex_hull {
                let mut temp_error = (i64::from(point.x) - probe.0).abs()
                    + (i64::from(point.y) - probe.1).abs();

                if normalizer != 0 {
                    temp_error /= normalizer;
                }

                if height != 0 {
                    temp_error *= width / height;
                }

                if point_error < temp_error || point_error < 0 {
                    point_error = temp_error;
                }
            }

            total_error += point_error;
            angle += ANGLE_INCREMENT;
        }

        total_error
    }

    /// Calculates the absolute difference between the given measured area
    /// and the area of a perfect circle of the given diameter. Not used for
    /// candidate selection; exposed for consumers that want a secondary
    /// plausibility signal.
    pub fn circle_area_error(measured_diameter: u32, measured_area: u32) -> f64 {
        let radius = f64::from(measured_diameter) / 2.0;
        (f64::from(measured_area) - PI * radius * radius).abs()
    }

    /// Tests whether the measured center of `object_details` falls within
    /// half the hull's width/height of the hull's bounding center, checked
    /// independently on each axis. A rectangular window test, not an exact
    /// polygon containment.
    pub fn object_is_within_hull_bounds(
        object_details: &ObjectDetails,
        convex_hull: &ConvexHull,
    ) -> bool {
        let hull_details = hull_dimensions_as_details(convex_hull);

        let x_offset =
            (i64::from(hull_details.center_x) - i64::from(object_details.center_x)).abs();
        let y_offset =
            (i64::from(hull_details.center_y) - i64::from(object_details.center_y)).abs();

        x_offset <= i64::from(hull_details.width / 2)
            && y_offset <= i64::from(hull_details.height / 2)
    }

    /// Calculates a point on a circle's circumference from its center,
    /// radius and an angle in radians. Coordinates are signed: probes near
    /// the frame edge may fall outside the image.
    pub fn point_on_circumference(center: Point, radius: u32, angle: f64) -> (i64, i64) {
        let x = i64::from(center.x) + (f64::from(radius) * angle.cos()).round() as i64;
        let y = i64::from(center.y) + (f64::from(radius) * angle.sin()).round() as i64;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::circularity::*;
    use crate::core_modules::object_details::{ObjectDetails, Point};

    fn hull_of(points: &[(u32, u32)]) -> Vec<Point> {
        points.iter().map(|&(x, y)| Point { x, y }).collect()
    }

    #[test]
    fn dimensions_of_rectangle_corners() {
        let hull = hull_of(&[(0, 0), (10, 0), (10, 20), (0, 20)]);

        let dimensions = calculate_hull_dimensions(&hull);
        assert_eq!(dimensions.width, 10);
        assert_eq!(dimensions.height, 20);
        assert_eq!(dimensions.center, Point { x: 5, y: 10 });
    }

    #[test]
    fn degenerate_hull_yields_zeroed_dimensions() {
        let empty = hull_of(&[]);
        let single = hull_of(&[(7, 9)]);

        assert_eq!(calculate_hull_dimensions(&empty), Default::default());
        assert_eq!(calculate_hull_dimensions(&single), Default::default());
    }

    #[test]
    fn square_hull_scores_one_per_probe() {
        // For a 10x10 square the farthest corner from every probe sits at a
        // Manhattan distance between 10 and 19, and the normalizer is 10, so
        // each of the 12 probes contributes exactly 1.
        let hull = hull_of(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let dimensions = calculate_hull_dimensions(&hull);

        assert_eq!(circle_circumference_error(&hull, &dimensions), 12);
    }

    #[test]
    fn elongated_hull_scores_worse_than_square() {
        let square = hull_of(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let flat = hull_of(&[(0, 0), (40, 0), (40, 4), (0, 4)]);

        let square_error =
            circle_circumference_error(&square, &calculate_hull_dimensions(&square));
        let flat_error = circle_circumference_error(&flat, &calculate_hull_dimensions(&flat));

        assert!(square_error < flat_error);
    }

    #[test]
    fn degenerate_hull_error_does_not_divide_by_zero() {
        // Two identical points: width and height are both zero, so both the
        // normalizer and the aspect correction must be skipped.
        let hull = hull_of(&[(5, 5), (5, 5)]);
        let dimensions = calculate_hull_dimensions(&hull);

        let error = circle_circumference_error(&hull, &dimensions);
        assert_eq!(error, 0);
    }

    #[test]
    fn area_error_of_near_perfect_circle_is_small() {
        // pi * 5^2 = 78.54; a measured area of 79 is off by ~0.46.
        let error = circle_area_error(10, 79);
        assert!((error - 0.4602).abs() < 1e-3);
    }

    #[test]
    fn containment_uses_half_extent_window() {
        // Hull bounding box: width 10, height 10, center (50, 50).
        let hull = hull_of(&[(45, 45), (55, 45), (55, 55), (45, 55)]);

        let near = ObjectDetails {
            center_x: 54,
            center_y: 54,
            ..ObjectDetails::default()
        };
        let far = ObjectDetails {
            center_x: 56,
            center_y: 56,
            ..ObjectDetails::default()
        };

        assert!(object_is_within_hull_bounds(&near, &hull));
        assert!(!object_is_within_hull_bounds(&far, &hull));
    }

    #[test]
    fn probe_points_land_on_the_axes() {
        let center = Point { x: 50, y: 50 };

        assert_eq!(point_on_circumference(center, 10, 0.0), (60, 50));
        assert_eq!(
            point_on_circumference(center, 10, std::f64::consts::FRAC_PI_2),
            (50, 60)
        );
        assert_eq!(
            point_on_circumference(center, 10, std::f64::consts::PI),
            (40, 50)
        );
    }
}
