// THEORY:
// The `object_filter` ranks and thresholds the records produced by the
// `object_profiler`, so that only blobs big enough to be a candidate ball
// ever reach the more expensive hull-building stage.
//
// Key architectural principles:
// 1.  **Size ranking first**: candidates are sorted descending by
//     `width * height` (the product of the two density profiles, not the
//     exact pixel `area`), so the hull collector can stop early once it has
//     enough candidates and still know it looked at the largest ones.
// 2.  **Single-axis threshold**: only the `width` profile is compared against
//     the minimum size. The matching `height` check exists below as a
//     disabled condition; enabling it changes which blobs qualify and the
//     downstream tuning depends on the single-axis behavior.
// 3.  **Stateless utility**: takes a map, returns ids; no memory between
//     frames. Ownership of the id list transfers to the caller.

use crate::core_modules::object_details::ObjectDetails;
use crate::core_modules::object_profiler::object_profiler;

pub mod object_filter {
    use super::*;

    /// Returns the ids of all objects whose `width` profile is at least
    /// `min_size`, in descending `width * height` order.
    pub fn resolve_large_object_ids(
        object_map: &[u16],
        map_width: u32,
        map_height: u32,
        object_count: u16,
        min_size: u32,
    ) -> Vec<u16> {
        let mut details_list =
            object_profiler::extract_object_details(object_map, map_width, map_height, object_count);
        sort_object_details_by_size(&mut details_list);

        let mut large_object_ids = Vec::new();

        for details in &details_list {
            if details.width >= min_size
            /* && details.height >= min_size */
            {
                large_object_ids.push(details.id);
            }
        }

        large_object_ids
    }

    /// Sorts records descending by the product of their size profiles.
    /// Ties carry no guaranteed order among themselves.
    pub fn sort_object_details_by_size(details_list: &mut [ObjectDetails]) {
        details_list.sort_unstable_by(|a, b| {
            let a_size = u64::from(a.width) * u64::from(a.height);
            let b_size = u64::from(b.width) * u64::from(b.height);
            b_size.cmp(&a_size)
        });
    }
}
