use std::sync::Arc;

use fc_core::frame::FrameBuffer;
use fc_core::traits::Source;
use rayon::prelude::*;

/// Plasma animé en niveaux de gris. Deux frames successives ne diffèrent
/// qu'en partie : bon banc d'essai pour le rendu différentiel.
///
/// # Example
/// ```
/// use fc_core::traits::Source;
/// use fc_source::plasma::PlasmaSource;
/// let mut source = PlasmaSource::new(16, 8);
/// let frame = source.next_frame().unwrap();
/// assert_eq!(frame.data.len(), 16 * 8 * 4);
/// ```
pub struct PlasmaSource {
    width: u32,
    height: u32,
    tick: u64,
    /// Avance de phase par frame, en radians.
    speed: f32,
}

impl PlasmaSource {
    /// Crée un générateur plasma aux dimensions données.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tick: 0,
            speed: 0.12,
        }
    }

    /// Override the phase advance per frame.
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Render the frame at phase `t` into `frame`.
    fn render(&self, t: f32, frame: &mut FrameBuffer) {
        let width = self.width as usize;
        frame
            .data
            .par_chunks_mut((width * 4).max(4))
            .enumerate()
            .for_each(|(y, row)| {
                let fy = y as f32;
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let fx = x as f32;
                    let v = (fx * 0.15 + t).sin()
                        + (fy * 0.21 - t * 0.7).sin()
                        + ((fx + fy) * 0.08 + t * 0.5).sin();
                    // v ∈ [-3, 3]
                    let gray = ((v + 3.0) / 6.0 * 255.0).clamp(0.0, 255.0) as u8;
                    px.copy_from_slice(&[gray, gray, gray, 255]);
                }
            });
    }
}

impl Source for PlasmaSource {
    fn next_frame(&mut self) -> Option<Arc<FrameBuffer>> {
        let mut frame = FrameBuffer::new(self.width, self.height);
        self.render(self.tick as f32 * self.speed, &mut frame);
        self.tick += 1;
        Some(Arc::new(frame))
    }

    fn native_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn is_live(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_change_over_time() {
        let mut source = PlasmaSource::new(32, 16);
        let a = source.next_frame().unwrap();
        let b = source.next_frame().unwrap();
        assert_ne!(a.data, b.data);
        assert!(source.is_live());
    }

    #[test]
    fn alpha_is_opaque() {
        let mut source = PlasmaSource::new(8, 4).with_speed(1.0);
        let frame = source.next_frame().unwrap();
        assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn unknown_generator_rejected() {
        assert!(crate::create_procedural_source("mandelbrot", 4, 4).is_err());
        assert!(crate::create_procedural_source("Plasma", 4, 4).is_ok());
    }
}
