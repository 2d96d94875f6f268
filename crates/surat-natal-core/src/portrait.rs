//! Portrait decoding.
//!
//! The [`ImageLoader`] capability turns the raw bytes of a user-selected file
//! into a [`Portrait`]: a PNG cropped to the card's photo frame and ready to
//! embed in the rendered card.

use std::io::Cursor;
use std::sync::Arc;

use base64::Engine;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::error::{CardError, CardResult};

/// Aspect ratio (width / height) of the photo frame on the card.
pub const FRAME_ASPECT: f64 = 4.0 / 3.0;

/// Longest edge kept after decoding; larger photos are downscaled.
pub const DEFAULT_MAX_EDGE: u32 = 1600;

/// Decoded photo shown on the card and embedded in the exported image.
///
/// Cloning is cheap: the encoded bytes and data URI are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Portrait {
    png: Arc<[u8]>,
    data_uri: Arc<str>,
    width: u32,
    height: u32,
}

impl Portrait {
    /// Wrap already-encoded PNG bytes.
    pub fn from_png(png: Vec<u8>, width: u32, height: u32) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        Self {
            data_uri: Arc::from(format!("data:image/png;base64,{}", encoded)),
            png: Arc::from(png),
            width,
            height,
        }
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// `data:image/png;base64,...` form for `<img>` and SVG `<image>`.
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Image Loader capability: file bytes in, displayable portrait out.
///
/// Implementations are blocking; the service runs them off the UI thread.
pub trait ImageLoader: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> CardResult<Portrait>;
}

/// [`ImageLoader`] backed by the `image` crate.
#[derive(Debug, Clone)]
pub struct PhotoDecoder {
    max_edge: u32,
}

impl Default for PhotoDecoder {
    fn default() -> Self {
        Self {
            max_edge: DEFAULT_MAX_EDGE,
        }
    }
}

impl PhotoDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the downscale limit.
    pub fn with_max_edge(mut self, max_edge: u32) -> Self {
        self.max_edge = max_edge.max(1);
        self
    }
}

impl ImageLoader for PhotoDecoder {
    fn decode(&self, bytes: &[u8]) -> CardResult<Portrait> {
        if bytes.is_empty() {
            return Err(CardError::Decode("file is empty".to_string()));
        }

        let format = image::guess_format(bytes)
            .map_err(|e| CardError::Decode(format!("unrecognized image format: {}", e)))?;
        let img = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| CardError::Decode(e.to_string()))?;

        let mut framed = crop_to_frame(img, FRAME_ASPECT);
        let (w, h) = framed.dimensions();
        if w.max(h) > self.max_edge {
            framed = framed.resize(self.max_edge, self.max_edge, FilterType::Triangle);
        }

        let (width, height) = framed.dimensions();
        let mut png = Vec::new();
        framed
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| CardError::Decode(format!("failed to encode: {}", e)))?;

        tracing::debug!(
            format = ?format,
            width,
            height,
            bytes = png.len(),
            "Decoded portrait"
        );

        Ok(Portrait::from_png(png, width, height))
    }
}

/// Centre-crop to the given width/height ratio.
fn crop_to_frame(img: DynamicImage, aspect: f64) -> DynamicImage {
    let (width, height) = img.dimensions();

    let frame_h = (width as f64 / aspect) as u32;
    let (target_w, target_h) = if frame_h <= height {
        (width, frame_h.max(1))
    } else {
        (((height as f64 * aspect) as u32).max(1), height)
    };

    let x = width.saturating_sub(target_w) / 2;
    let y = height.saturating_sub(target_h) / 2;

    img.crop_imm(x, y, target_w, target_h)
}
