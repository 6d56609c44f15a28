// THEORY:
// The `image_ops` module defines the boundary between this crate and the
// image-processing backend that owns the pixel-level work: connected-component
// labeling, point extraction, convex hull construction and debug line drawing.
// The classification stage never implements any of these itself; it only
// states, through the `ImageOps` trait, what it needs from whoever does.
//
// Key architectural principles:
// 1.  **Trait seam**: keeping the backend behind a trait lets the pipeline be
//     exercised in tests with small hand-built mocks, and lets production
//     callers plug in whatever segmentation library they already use.
// 2.  **Opaque coordinate transforms**: capture hardware may deliver frames
//     mirrored or rotated. The `ImageTransform` callback maps pixel
//     coordinates between spaces; this crate passes it through to the backend
//     untouched and never interprets it.
// 3.  **Structural absence**: backends signal failure by returning `None`
//     (no object map, no points), never by panicking. The pipeline treats
//     every `None` as "nothing qualified this frame."

use crate::core_modules::object_details::Point;

/// An ordered sequence of points describing the convex boundary of one
/// object's pixel set. Treated everywhere as an open polyline: consecutive
/// points form edges and the closing edge back to the first point is never
/// drawn and never assumed.
pub type ConvexHull = Vec<Point>;

/// An opaque mapping from one pixel coordinate space to another, e.g. for
/// mirrored or rotated capture. Passed through to the backend unmodified.
pub type ImageTransform<'a> = &'a dyn Fn(Point) -> Point;

/// The identity transform, for callers whose frames are already upright.
pub fn identity_transform(point: Point) -> Point {
    point
}

/// The contract this crate consumes from the image-processing backend.
pub trait ImageOps {
    /// Builds an object-label map from a binary image: `0` marks background,
    /// `1..` mark connected foreground components. Returns `None` when no map
    /// can be produced for the frame.
    fn create_object_map(
        &self,
        binary_image: &[u8],
        width: u32,
        height: u32,
        transform: ImageTransform,
    ) -> Option<Vec<u16>>;

    /// Renumbers the labels of `object_map` in place into a dense
    /// `1..=object_count` range and returns the resulting object count.
    fn organize_object_map(&self, object_map: &mut [u16], pixel_count: usize) -> u16;

    /// Returns every pixel coordinate belonging to `object_id`, in an order
    /// suitable for convex hull construction, or `None` if the object yields
    /// no points.
    fn extract_sorted_object_points(
        &self,
        object_map: &[u16],
        width: u32,
        height: u32,
        object_id: u16,
    ) -> Option<Vec<Point>>;

    /// Builds a convex hull from a sorted point set. `closed` asks the
    /// backend to repeat the first point at the end of the sequence.
    fn create_convex_hull(&self, points: &[Point], closed: bool) -> ConvexHull;

    /// Draws a debug line segment onto the image buffer, applying `transform`
    /// to the endpoints as needed.
    #[allow(clippy::too_many_arguments)]
    fn draw_line(
        &self,
        image: &mut [u8],
        width: u32,
        height: u32,
        p1: Point,
        p2: Point,
        transform: ImageTransform,
        thickness: u32,
        color: [u8; 3],
    );
}
