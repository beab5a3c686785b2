//! Media pre-processing rules
//!
//! Constraints enforced client-side before a file is attached to a post,
//! and the crop/trim math applied when a file falls outside them. Violations
//! are local recoverable errors; the user re-selects, nothing is retried.

use thiserror::Error;

/// Narrowest legal width:height ratio (portrait limit)
pub const MIN_ASPECT_RATIO: f64 = 0.8;

/// Widest legal width:height ratio (landscape limit)
pub const MAX_ASPECT_RATIO: f64 = 1.91;

/// Longest video accepted without trimming, in seconds
pub const MAX_VIDEO_SECS: f64 = 30.0;

/// Largest accepted video file
pub const MAX_VIDEO_BYTES: u64 = 10 * 1024 * 1024;

/// Most attachments per post
pub const MAX_MEDIA_FILES: usize = 3;

const IMAGE_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];
const VIDEO_TYPES: [&str; 2] = ["video/mp4", "video/quicktime"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    #[error("Maximum {MAX_MEDIA_FILES} files allowed.")]
    TooManyFiles,

    #[error("Invalid file type. Allowed types: PNG, JPG, JPEG, MP4, MOV.")]
    UnsupportedType,

    #[error("Video file size must be less than 10MB.")]
    VideoTooLarge,

    #[error("Error reading media file.")]
    Unreadable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Result<Self, MediaError> {
        if IMAGE_TYPES.contains(&mime) {
            Ok(MediaKind::Image)
        } else if VIDEO_TYPES.contains(&mime) {
            Ok(MediaKind::Video)
        } else {
            Err(MediaError::UnsupportedType)
        }
    }
}

/// Validate a selection of (mime, size) pairs as a whole
pub fn validate_selection(files: &[(String, u64)]) -> Result<(), MediaError> {
    if files.len() > MAX_MEDIA_FILES {
        return Err(MediaError::TooManyFiles);
    }
    for (mime, size) in files {
        let kind = MediaKind::from_mime(mime)?;
        if kind == MediaKind::Video && *size > MAX_VIDEO_BYTES {
            return Err(MediaError::VideoTooLarge);
        }
    }
    Ok(())
}

pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    f64::from(width) / f64::from(height)
}

/// An image outside the legal ratio band must go through the crop flow
pub fn needs_crop(width: u32, height: u32) -> bool {
    let ratio = aspect_ratio(width, height);
    !(MIN_ASPECT_RATIO..=MAX_ASPECT_RATIO).contains(&ratio)
}

/// The legal ratio closest to the image's own
pub fn nearest_legal_ratio(width: u32, height: u32) -> f64 {
    aspect_ratio(width, height).clamp(MIN_ASPECT_RATIO, MAX_ASPECT_RATIO)
}

/// Source rectangle for a centered crop, in source pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Largest centered sub-rectangle of `width x height` at the nearest legal
/// ratio. Returns the full frame when no crop is needed.
pub fn crop_box(width: u32, height: u32) -> CropBox {
    let w = f64::from(width);
    let h = f64::from(height);
    if !needs_crop(width, height) {
        return CropBox { x: 0.0, y: 0.0, width: w, height: h };
    }

    let target = nearest_legal_ratio(width, height);
    if aspect_ratio(width, height) > target {
        // Too wide: keep full height, trim the sides
        let new_w = h * target;
        CropBox { x: (w - new_w) / 2.0, y: 0.0, width: new_w, height: h }
    } else {
        // Too tall: keep full width, trim top and bottom
        let new_h = w / target;
        CropBox { x: 0.0, y: (h - new_h) / 2.0, width: w, height: new_h }
    }
}

/// A video longer than the cap needs the trim selector
pub fn needs_trim(duration_secs: f64) -> bool {
    duration_secs > MAX_VIDEO_SECS
}

/// Trim metadata carried alongside the upload; applied server-side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimRange {
    pub start: f64,
    pub end: f64,
}

impl TrimRange {
    /// Clamp a user-chosen range to the video bounds and the duration cap.
    /// `start` is snapped first; `end` then stays within `(start, start+30]`.
    pub fn clamped(start: f64, end: f64, duration: f64) -> Self {
        let start = start.clamp(0.0, duration);
        let end = end.clamp(start, duration).min(start + MAX_VIDEO_SECS);
        TrimRange { start, end }
    }

    pub fn len_secs(&self) -> f64 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_band_edges() {
        // 2:1 is outside the band, 1:1 inside
        assert!(needs_crop(2000, 1000));
        assert!(!needs_crop(1000, 1000));
        // Edges are legal
        assert!(!needs_crop(800, 1000)); // exactly 0.8
        assert!(!needs_crop(1910, 1000)); // exactly 1.91
        assert!(needs_crop(799, 1000));
        assert!(needs_crop(1911, 1000));
    }

    #[test]
    fn test_crop_box_wide_image() {
        // 2:1 is cropped to 1.91 keeping full height, centered
        let b = crop_box(2000, 1000);
        assert_eq!(b.height, 1000.0);
        assert!((b.width - 1910.0).abs() < 1e-9);
        assert!((b.x - 45.0).abs() < 1e-9);
        assert_eq!(b.y, 0.0);
    }

    #[test]
    fn test_crop_box_tall_image() {
        // 1:2 is cropped to 0.8 keeping full width
        let b = crop_box(1000, 2000);
        assert_eq!(b.width, 1000.0);
        assert!((b.height - 1250.0).abs() < 1e-9);
        assert_eq!(b.x, 0.0);
        assert!((b.y - 375.0).abs() < 1e-9);
    }

    #[test]
    fn test_crop_box_legal_image_is_full_frame() {
        let b = crop_box(1080, 1080);
        assert_eq!(b, CropBox { x: 0.0, y: 0.0, width: 1080.0, height: 1080.0 });
    }

    #[test]
    fn test_trim_threshold() {
        assert!(!needs_trim(30.0));
        assert!(needs_trim(30.1));
        assert!(!needs_trim(5.0));
    }

    #[test]
    fn test_trim_range_clamping() {
        let r = TrimRange::clamped(-1.0, 45.0, 40.0);
        assert_eq!(r.start, 0.0);
        assert_eq!(r.end, 30.0);

        let r = TrimRange::clamped(10.0, 60.0, 50.0);
        assert_eq!(r.start, 10.0);
        assert_eq!(r.end, 40.0);
        assert_eq!(r.len_secs(), 30.0);

        // end never precedes start
        let r = TrimRange::clamped(20.0, 5.0, 50.0);
        assert_eq!(r.start, 20.0);
        assert_eq!(r.end, 20.0);
    }

    #[test]
    fn test_selection_validation() {
        let ok = vec![
            ("image/png".to_string(), 100),
            ("video/mp4".to_string(), 1024),
        ];
        assert!(validate_selection(&ok).is_ok());

        let too_many: Vec<_> = (0..4).map(|_| ("image/png".to_string(), 10)).collect();
        assert_eq!(validate_selection(&too_many), Err(MediaError::TooManyFiles));

        let bad_type = vec![("image/gif".to_string(), 10)];
        assert_eq!(validate_selection(&bad_type), Err(MediaError::UnsupportedType));

        let big_video = vec![("video/mp4".to_string(), MAX_VIDEO_BYTES + 1)];
        assert_eq!(validate_selection(&big_video), Err(MediaError::VideoTooLarge));

        // Image size is not capped client-side
        let big_image = vec![("image/png".to_string(), MAX_VIDEO_BYTES * 5)];
        assert!(validate_selection(&big_image).is_ok());
    }
}
