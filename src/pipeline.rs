// THEORY:
// The `pipeline` module is the final, top-level API for the classification
// stage. It binds an `ImageOps` backend and a `PipelineConfig` together and
// exposes the operations a downstream consumer (an effect renderer or a
// tracker) actually calls, hiding the individual core modules behind one
// interface.
//
// Everything here is synchronous and runs to completion on the calling
// thread: one call per frame, no shared state between invocations, and the
// `max_candidates` budget as the only built-in cost control. Callers that
// need a hard frame budget bound the candidate count.

use crate::core_modules::candidate_selector::candidate_selector;
use crate::core_modules::circularity::circularity;
use crate::core_modules::hull_collector::hull_collector;
use crate::core_modules::object_filter::object_filter;
use crate::core_modules::object_profiler::object_profiler;

// Re-export key data structures for the public API.
pub use crate::core_modules::circularity::HullDimensions;
pub use crate::core_modules::image_ops::{ConvexHull, ImageOps, ImageTransform, identity_transform};
pub use crate::core_modules::object_details::{ObjectDetails, Point};

/// Configuration for the `CirclePipeline`, allowing for tunable behavior.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub image_width: u32,
    pub image_height: u32,
    /// The candidate budget handed to the hull collector. The collector's
    /// bound is inclusive, so up to `max_candidates + 1` hulls may be scored
    /// in a frame.
    pub max_candidates: u8,
}

/// The main, top-level struct of the classification stage. Generic over the
/// image-processing backend so tests and integrations can supply their own.
pub struct CirclePipeline<O: ImageOps> {
    ops: O,
    config: PipelineConfig,
}

impl<O: ImageOps> CirclePipeline<O> {
    pub fn new(ops: O, config: PipelineConfig) -> Self {
        Self { ops, config }
    }

    /// Extracts per-object size records from an organized object map.
    pub fn object_details(&self, object_map: &[u16], object_count: u16) -> Vec<ObjectDetails> {
        object_profiler::extract_object_details(
            object_map,
            self.config.image_width,
            self.config.image_height,
            object_count,
        )
    }

    /// Returns the ids of objects whose `width` profile reaches `min_size`,
    /// largest first.
    pub fn large_object_ids(
        &self,
        object_map: &[u16],
        object_count: u16,
        min_size: u32,
    ) -> Vec<u16> {
        object_filter::resolve_large_object_ids(
            object_map,
            self.config.image_width,
            self.config.image_height,
            object_count,
            min_size,
        )
    }

    /// Segments the binary image through the backend and returns the convex
    /// hulls of the largest qualifying objects, largest first.
    pub fn collect_hulls(&self, binary_image: &[u8], transform: ImageTransform) -> Vec<ConvexHull> {
        hull_collector::extract_convex_hulls_of_largest_objects(
            &self.ops,
            binary_image,
            self.config.image_width,
            self.config.image_height,
            self.config.max_candidates,
            transform,
        )
    }

    /// Returns the index of the hull closest to a circle and its circularity
    /// error; `(None, -1)` when no candidate can be evaluated.
    pub fn closest_to_circle(&self, convex_hulls: &[ConvexHull]) -> (Option<usize>, i64) {
        candidate_selector::convex_hull_closest_to_circle(convex_hulls)
    }

    /// Runs the full stage on one frame: collects candidates, annotates the
    /// frame with every candidate and the winner (debug overlay), and
    /// returns the most circular hull, or `None` when nothing qualified.
    pub fn best_circular_hull(
        &self,
        binary_image: &mut [u8],
        transform: ImageTransform,
    ) -> Option<ConvexHull> {
        candidate_selector::best_convex_hull(
            &self.ops,
            binary_image,
            self.config.image_width,
            self.config.image_height,
            self.config.max_candidates,
            transform,
        )
    }

    /// Tests whether the measured object's center falls within the hull's
    /// approximate bounding window.
    pub fn object_within_hull(
        &self,
        object_details: &ObjectDetails,
        convex_hull: &ConvexHull,
    ) -> bool {
        circularity::object_is_within_hull_bounds(object_details, convex_hull)
    }
}
