//! Media pre-processing
//!
//! Browser-side half of the upload constraints: probing dimensions and
//! duration, and producing cropped blobs. The rules themselves live in
//! `learnloop_shared::media`.

mod preprocess;

pub use preprocess::{
    crop_image, probe_image_dimensions, probe_video_duration, SelectedMedia,
};
