/// Niveau de luminosité d'un pixel RGB, dans `0..=3`.
///
/// Coefficients luma Rec. 601 ; la luminance 0–255 est découpée en quatre
/// tranches de 64. L'alpha est ignoré.
///
/// # Example
/// ```
/// use fc_core::frame::brightness_level;
/// assert_eq!(brightness_level(0, 0, 0), 0);
/// assert_eq!(brightness_level(255, 255, 255), 3);
/// ```
#[inline(always)]
#[must_use]
pub fn brightness_level(r: u8, g: u8, b: u8) -> u8 {
    let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    ((luma / 64.0) as u8).min(3)
}

/// Frame RGBA possédée, telle que produite par les sources.
///
/// Stocke les pixels en row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use fc_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer rempli de zéros (noir transparent).
    ///
    /// # Example
    /// ```
    /// use fc_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Byte offset of pixel (x, y).
    #[inline(always)]
    #[must_use]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Accès au pixel (x, y) → (r, g, b, a). Hors limites → noir transparent.
    ///
    /// # Example
    /// ```
    /// use fc_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.offset(x, y);
        match self.data.get(idx..idx + 4) {
            Some(&[r, g, b, a]) => (r, g, b, a),
            _ => (0, 0, 0, 0),
        }
    }

    /// Overwrite pixel (x, y). Out-of-range writes are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: (u8, u8, u8, u8)) {
        let idx = self.offset(x, y);
        if let Some(px) = self.data.get_mut(idx..idx + 4) {
            px.copy_from_slice(&[rgba.0, rgba.1, rgba.2, rgba.3]);
        }
    }

    /// Brightness bucket of pixel (x, y).
    ///
    /// # Example
    /// ```
    /// use fc_core::frame::FrameBuffer;
    /// let mut fb = FrameBuffer::new(1, 1);
    /// fb.set_pixel(0, 0, (255, 255, 255, 0));
    /// assert_eq!(fb.brightness_level(0, 0), 3);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn brightness_level(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, _) = self.pixel(x, y);
        brightness_level(r, g, b)
    }

    /// Fill every pixel with one color.
    pub fn fill(&mut self, rgba: (u8, u8, u8, u8)) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[rgba.0, rgba.1, rgba.2, rgba.3]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_buckets() {
        assert_eq!(brightness_level(100, 100, 100), 1);
        assert_eq!(brightness_level(150, 150, 150), 2);
        assert_eq!(brightness_level(200, 200, 200), 3);
        // Pure primaries land in different buckets because of the weights.
        assert_eq!(brightness_level(0, 0, 255), 0);
        assert_eq!(brightness_level(255, 0, 0), 1);
        assert_eq!(brightness_level(0, 255, 0), 2);
    }

    #[test]
    fn alpha_is_ignored() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set_pixel(0, 0, (200, 200, 200, 0));
        fb.set_pixel(1, 0, (200, 200, 200, 255));
        assert_eq!(fb.brightness_level(0, 0), fb.brightness_level(1, 0));
    }

    #[test]
    fn brightness_is_monotonic_in_gray() {
        let mut prev = 0;
        for v in 0..=255u8 {
            let level = brightness_level(v, v, v);
            assert!(level >= prev, "non-monotonic at {v}");
            assert!(level <= 3);
            prev = level;
        }
    }

    #[test]
    fn fill_and_read_back() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.fill((1, 2, 3, 4));
        assert_eq!(fb.pixel(2, 1), (1, 2, 3, 4));
    }
}
