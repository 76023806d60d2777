use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{PixelType, ResizeOptions, Resizer};
use fc_core::frame::FrameBuffer;
use fc_core::traits::Source;

/// Couleur des bandes autour d'une image dont le ratio diffère du canvas.
const LETTERBOX: (u8, u8, u8, u8) = (0, 0, 0, 255);

/// Image fixe inscrite dans le canvas. Retourne toujours la même frame.
///
/// # Example
/// ```no_run
/// use fc_source::image::ImageSource;
/// use std::path::Path;
/// let source = ImageSource::new(Path::new("test.png"), 80, 48).unwrap();
/// ```
pub struct ImageSource {
    frame: Arc<FrameBuffer>,
}

impl ImageSource {
    /// Charge une image depuis le disque et l'inscrit dans `width × height`.
    ///
    /// # Errors
    /// Returns an error if the image cannot be loaded or resized.
    pub fn new(path: &Path, width: u32, height: u32) -> Result<Self> {
        let native = load_image(path)?;
        log::info!(
            "{} chargée ({}×{}), inscrite dans {width}×{height}",
            path.display(),
            native.width,
            native.height
        );
        Self::from_frame(&native, width, height)
    }

    /// Inscrit une frame déjà décodée dans le canvas.
    ///
    /// # Errors
    /// Returns an error if resizing fails.
    pub fn from_frame(native: &FrameBuffer, width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            frame: Arc::new(fit_to_canvas(native, width, height)?),
        })
    }
}

impl Source for ImageSource {
    fn next_frame(&mut self) -> Option<Arc<FrameBuffer>> {
        Some(Arc::clone(&self.frame))
    }

    fn native_size(&self) -> (u32, u32) {
        (self.frame.width, self.frame.height)
    }

    fn is_live(&self) -> bool {
        false
    }
}

/// Décode un fichier image en frame RGBA, taille native.
///
/// # Errors
/// Returns an error if the image cannot be loaded.
pub fn load_image(path: &Path) -> Result<FrameBuffer> {
    let img = image::open(path).with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}

/// Plus grande taille de ratio `src_w:src_h` tenant dans `canvas_w × canvas_h`.
///
/// Une cellule de terminal (environ 1:2) affiche 1×2 pixels, donc les pixels
/// du canvas sont à peu près carrés : aucune correction d'aspect n'est
/// nécessaire au-delà du ratio de la source.
///
/// # Example
/// ```
/// use fc_source::image::fitted_size;
/// assert_eq!(fitted_size(160, 90, 80, 48), (80, 45));
/// assert_eq!(fitted_size(100, 200, 80, 48), (24, 48));
/// ```
#[must_use]
pub fn fitted_size(src_w: u32, src_h: u32, canvas_w: u32, canvas_h: u32) -> (u32, u32) {
    let height_at_full_width = u64::from(src_h) * u64::from(canvas_w) / u64::from(src_w.max(1));
    if height_at_full_width <= u64::from(canvas_h) {
        (canvas_w, (height_at_full_width as u32).max(1))
    } else {
        let width_at_full_height =
            u64::from(src_w) * u64::from(canvas_h) / u64::from(src_h.max(1));
        ((width_at_full_height as u32).max(1), canvas_h)
    }
}

/// Met `src` à l'échelle pour tenir dans le canvas en gardant son ratio, puis
/// le centre sur un fond noir opaque.
///
/// # Errors
/// Returns an error if `src` is empty or the resize fails.
///
/// # Example
/// ```
/// use fc_core::frame::FrameBuffer;
/// use fc_source::image::fit_to_canvas;
/// let src = FrameBuffer::new(160, 90);
/// let fitted = fit_to_canvas(&src, 80, 48).unwrap();
/// assert_eq!((fitted.width, fitted.height), (80, 48));
/// ```
pub fn fit_to_canvas(src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer> {
    if src.width == 0 || src.height == 0 {
        anyhow::bail!("Image vide ({}×{})", src.width, src.height);
    }
    let (fit_w, fit_h) = fitted_size(src.width, src.height, width, height);

    let scaled = if (fit_w, fit_h) == (src.width, src.height) {
        src.data.clone()
    } else {
        let src_view = ImageRef::new(src.width, src.height, &src.data, PixelType::U8x4)
            .context("Dimensions source invalides")?;
        let mut dst_image = Image::new(fit_w, fit_h, PixelType::U8x4);
        Resizer::new()
            .resize(&src_view, &mut dst_image, Some(&ResizeOptions::new()))
            .context("Échec du redimensionnement")?;
        dst_image.into_vec()
    };

    let mut out = FrameBuffer::new(width, height);
    out.fill(LETTERBOX);
    let left = (width - fit_w) / 2;
    let top = (height - fit_h) / 2;
    let row_bytes = fit_w as usize * 4;
    for (y, row) in scaled.chunks_exact(row_bytes).enumerate() {
        let start = out.offset(left, top + y as u32);
        out.data[start..start + row_bytes].copy_from_slice(row);
    }
    Ok(out)
}
