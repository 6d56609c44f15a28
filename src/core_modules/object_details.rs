// THEORY:
// The `object_details` module holds the "dumb" data containers of the
// measurement layer. An `ObjectDetails` record summarizes one labeled blob in
// a single frame: how many pixels it owns and how far it extends along each
// axis. It carries no behavior of its own; the `object_profiler` fills it in
// and every later stage only reads from it.
//
// Key architectural principles:
// 1.  **Density profiles, not bounding boxes**: `width` is the largest pixel
//     count found in any single row of the object and `height` the largest
//     count in any single column. For a ragged blob these are smaller than
//     the geometric bounding box. Downstream size thresholds are tuned to
//     exactly these profile values, so they must never be "corrected" into a
//     true bounding box.
// 2.  **Representative center**: `center_y` is the row that attained the
//     `width` maximum and `center_x` the column that attained the `height`
//     maximum. For round blobs this lands near the visual center without
//     ever storing a per-object coordinate list.
// 3.  **Per-frame lifetime**: records are created fresh for one
//     classification call and discarded when it returns. Nothing in this
//     crate keeps them across frames.

/// A simple struct to represent a 2D point or pixel coordinate on the frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Per-object size summary extracted from an organized object map.
/// This is a "dumb" data container; see the module notes for how `width`,
/// `height` and the center coordinates are defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectDetails {
    /// The object identifier, matching a value in the object map.
    pub id: u16,
    /// The exact number of pixels carrying this id.
    pub area: u32,
    /// The maximum pixel count found in any single row for this id.
    pub width: u32,
    /// The maximum pixel count found in any single column for this id.
    pub height: u32,
    /// The column index that attained the `height` maximum.
    pub center_x: u32,
    /// The row index that attained the `width` maximum.
    pub center_y: u32,
}
