pub mod candidate_selector;
pub mod circularity;
pub mod hull_collector;
pub mod image_ops;
pub mod object_details;
pub mod object_filter;
pub mod object_profiler;
pub mod utils;
