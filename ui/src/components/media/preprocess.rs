//! Browser media probing and transformation
//!
//! Images outside the legal aspect band are drawn onto a canvas sized to
//! the centered crop box and exported as a blob; videos are probed for
//! duration via a detached media element. Files the browser cannot decode
//! surface as `MediaError::Unreadable`.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Blob, CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlImageElement, HtmlVideoElement,
    Url,
};

use learnloop_shared::media::{CropBox, MediaError, MediaKind, TrimRange};

/// A file that passed validation, plus whatever transformation it needs
#[derive(Clone)]
pub struct SelectedMedia {
    pub file: File,
    pub kind: MediaKind,

    /// Object URL for previews; revoked when the selection is dropped
    pub preview_url: String,

    /// Image dimensions, when probed
    pub dimensions: Option<(u32, u32)>,

    /// Video duration in seconds, when probed
    pub duration: Option<f64>,

    /// Cropped replacement blob for out-of-band images
    pub cropped: Option<Blob>,

    /// Trim metadata for over-long videos, applied server-side
    pub trim: Option<TrimRange>,
}

impl SelectedMedia {
    pub fn new(file: File, kind: MediaKind) -> Result<Self, MediaError> {
        let preview_url =
            Url::create_object_url_with_blob(&file).map_err(|_| MediaError::Unreadable)?;
        Ok(Self {
            file,
            kind,
            preview_url,
            dimensions: None,
            duration: None,
            cropped: None,
            trim: None,
        })
    }
}

/// Load a file into a detached image element
async fn load_image(url: &str) -> Result<HtmlImageElement, MediaError> {
    let img = HtmlImageElement::new().map_err(|_| MediaError::Unreadable)?;

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_ok = tx.clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx_ok.borrow_mut().take() {
            let _ = tx.send(true);
        }
    });
    let tx_err = tx.clone();
    let onerror = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx_err.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });

    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    img.set_src(url);

    let loaded = rx.await.unwrap_or(false);
    img.set_onload(None);
    img.set_onerror(None);

    if loaded {
        Ok(img)
    } else {
        Err(MediaError::Unreadable)
    }
}

/// Natural width and height of an image file
pub async fn probe_image_dimensions(media: &SelectedMedia) -> Result<(u32, u32), MediaError> {
    let img = load_image(&media.preview_url).await?;
    Ok((img.natural_width(), img.natural_height()))
}

/// Duration in seconds of a video file, probed from metadata only
pub async fn probe_video_duration(media: &SelectedMedia) -> Result<f64, MediaError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MediaError::Unreadable)?;
    let video: HtmlVideoElement = document
        .create_element("video")
        .map_err(|_| MediaError::Unreadable)?
        .unchecked_into();
    video.set_preload("metadata");

    let (tx, rx) = oneshot::channel::<Option<f64>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_ok = tx.clone();
    let video_for_meta = video.clone();
    let onloadedmetadata = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx_ok.borrow_mut().take() {
            let _ = tx.send(Some(video_for_meta.duration()));
        }
    });
    let tx_err = tx.clone();
    let onerror = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx_err.borrow_mut().take() {
            let _ = tx.send(None);
        }
    });

    video.set_onloadedmetadata(Some(onloadedmetadata.as_ref().unchecked_ref()));
    video.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    video.set_src(&media.preview_url);

    let duration = rx.await.ok().flatten();
    video.set_onloadedmetadata(None);
    video.set_onerror(None);

    duration
        .filter(|d| d.is_finite())
        .ok_or(MediaError::Unreadable)
}

/// Draw the crop box of an image onto a canvas and export it as a blob
pub async fn crop_image(media: &SelectedMedia, crop: CropBox) -> Result<Blob, MediaError> {
    let img = load_image(&media.preview_url).await?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MediaError::Unreadable)?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| MediaError::Unreadable)?
        .unchecked_into();
    canvas.set_width(crop.width as u32);
    canvas.set_height(crop.height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| MediaError::Unreadable)?
        .ok_or(MediaError::Unreadable)?
        .unchecked_into();

    ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        &img,
        crop.x,
        crop.y,
        crop.width,
        crop.height,
        0.0,
        0.0,
        crop.width,
        crop.height,
    )
    .map_err(|_| MediaError::Unreadable)?;

    let (tx, rx) = oneshot::channel::<Option<Blob>>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(value.dyn_into::<Blob>().ok());
        }
    });
    canvas
        .to_blob(callback.as_ref().unchecked_ref())
        .map_err(|_| MediaError::Unreadable)?;

    let blob = rx.await.ok().flatten();
    drop(callback);
    blob.ok_or(MediaError::Unreadable)
}
