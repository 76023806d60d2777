//! Criterion benchmarks for fc-render.
//!
//! Run with: cargo bench -p fc-render

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use fc_core::palette::Palette;
use fc_render::canvas::FourColorCanvas;
use fc_render::writer::AnsiWriter;

const WIDTH: u32 = 160;
const HEIGHT: u32 = 96;

fn gradient(shift: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(WIDTH as usize * HEIGHT as usize * 4);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let v = ((x + y) as u8).wrapping_add(shift);
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    data
}

fn bench_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint");
    group.throughput(Throughput::Elements(u64::from(WIDTH * HEIGHT / 2)));

    let still = gradient(0);
    let moving = [gradient(0), gradient(64)];

    group.bench_function("full_redraw_160x96", |b| {
        let mut canvas = FourColorCanvas::new(WIDTH, HEIGHT, Palette::WhiteOnBlack).unwrap();
        let mut out = AnsiWriter::new(std::io::sink());
        b.iter(|| {
            canvas.reset();
            canvas.paint(black_box(&still), &mut out).unwrap();
        });
    });

    group.bench_function("unchanged_160x96", |b| {
        let mut canvas = FourColorCanvas::new(WIDTH, HEIGHT, Palette::WhiteOnBlack).unwrap();
        let mut out = AnsiWriter::new(std::io::sink());
        canvas.paint(&still, &mut out).unwrap();
        b.iter(|| canvas.paint(black_box(&still), &mut out).unwrap());
    });

    group.bench_function("alternating_160x96", |b| {
        let mut canvas = FourColorCanvas::new(WIDTH, HEIGHT, Palette::WhiteOnBlack).unwrap();
        let mut out = AnsiWriter::new(std::io::sink());
        let mut i = 0usize;
        b.iter(|| {
            canvas.paint(black_box(&moving[i % 2]), &mut out).unwrap();
            i += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_paint);
criterion_main!(benches);
