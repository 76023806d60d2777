use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use fc_core::traits::Source;
use fc_render::canvas::FourColorCanvas;
use fc_render::writer::TerminalWriter;

/// Ce qui a réellement été envoyé au terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Frames peintes (peut être inférieur à la demande si la source s'épuise).
    pub frames_painted: u64,
    /// Octets flushés, toutes frames confondues.
    pub bytes_sent: usize,
}

/// Peint jusqu'à `max_frames` frames de `source`, cadencées à `frame_time`
/// pour les sources animées.
///
/// # Errors
/// Returns the first paint error.
pub fn play(
    canvas: &mut FourColorCanvas,
    source: &mut dyn Source,
    writer: &mut impl TerminalWriter,
    max_frames: u64,
    frame_time: Duration,
) -> Result<PlaybackReport> {
    let mut report = PlaybackReport::default();

    for _ in 0..max_frames {
        let started = Instant::now();
        let Some(frame) = source.next_frame() else {
            log::info!("Source exhausted after {} frame(s).", report.frames_painted);
            break;
        };
        canvas.paint_frame(&frame, writer)?;
        report.frames_painted += 1;
        report.bytes_sent += canvas.last_stats().bytes_flushed;

        let rest = frame_time.saturating_sub(started.elapsed());
        if source.is_live() && !rest.is_zero() {
            thread::sleep(rest);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fc_core::frame::FrameBuffer;
    use fc_core::palette::Palette;
    use fc_render::writer::AnsiWriter;

    use super::*;

    /// Live source yielding a fixed number of frames.
    struct Countdown {
        left: u32,
    }

    impl Source for Countdown {
        fn next_frame(&mut self) -> Option<Arc<FrameBuffer>> {
            self.left = self.left.checked_sub(1)?;
            let mut fb = FrameBuffer::new(2, 2);
            let v = if self.left % 2 == 0 { 255 } else { 0 };
            fb.fill((v, v, v, 255));
            Some(Arc::new(fb))
        }

        fn native_size(&self) -> (u32, u32) {
            (2, 2)
        }

        fn is_live(&self) -> bool {
            true
        }
    }

    #[test]
    fn counts_frames_actually_painted() {
        let mut canvas = FourColorCanvas::new(2, 2, Palette::WhiteOnBlack).unwrap();
        let mut source = Countdown { left: 3 };
        let mut out = AnsiWriter::new(Vec::new());

        let report = play(&mut canvas, &mut source, &mut out, 300, Duration::ZERO).unwrap();

        assert_eq!(report.frames_painted, 3);
        assert_eq!(report.bytes_sent, out.get_ref().len());
    }

    #[test]
    fn stops_at_the_requested_count() {
        let mut canvas = FourColorCanvas::new(2, 2, Palette::WhiteOnBlack).unwrap();
        let mut source = Countdown { left: 10 };
        let mut out = AnsiWriter::new(Vec::new());

        let report = play(&mut canvas, &mut source, &mut out, 4, Duration::ZERO).unwrap();

        assert_eq!(report.frames_painted, 4);
        assert_eq!(source.left, 6);
    }

    #[test]
    fn empty_source_paints_nothing() {
        let mut canvas = FourColorCanvas::new(2, 2, Palette::WhiteOnBlack).unwrap();
        let mut out = AnsiWriter::new(Vec::new());

        let mut source = Countdown { left: 0 };
        let report = play(&mut canvas, &mut source, &mut out, 5, Duration::ZERO).unwrap();

        assert_eq!(report, PlaybackReport::default());
        assert!(out.get_ref().is_empty());
    }
}
