// This file is an example of how to use the `ball_vision` library.
// The main library entry point is `src/lib.rs`.

fn main() {
    println!("Ball Vision - Example Runner");
    // In a real application, you would implement `ImageOps` on top of your
    // segmentation backend, instantiate the pipeline, and feed it binary
    // frames from a video stream here.
    //
    // Example:
    // let config = ball_vision::pipeline::PipelineConfig { ... };
    // let mut pipeline = CirclePipeline::new(my_image_ops, config);
    // let frame = load_binary_frame_from_camera();
    // let hull = pipeline.best_circular_hull(&mut frame, &identity);
    // println!("Best hull: {:?}", hull);
}
