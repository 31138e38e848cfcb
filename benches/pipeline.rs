//! Performance measurement for the full analysis pipeline on synthetic canvases

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use uilens::analysis::edges::detect_edges;
use uilens::analysis::pipeline::{Analyzer, AnalyzerConfig};
use uilens::raster::PixelBuffer;

/// White canvas with a column of grid-aligned fills to keep the detector busy
fn synthetic_canvas(width: u32, height: u32, fills: u32) -> Option<PixelBuffer> {
    let mut data = vec![255_u8; (width * height * 4) as usize];

    for index in 0..fills {
        let top = 40 + index * 60;
        for y in top..(top + 40).min(height) {
            for x in 40_u32..240.min(width) {
                let offset = ((y * width + x) * 4) as usize;
                if let Some(pixel) = data.get_mut(offset..offset + 4) {
                    pixel.copy_from_slice(&[40, 90, 200, 255]);
                }
            }
        }
    }

    PixelBuffer::new(width, height, data).ok()
}

/// Measures full pipeline cost as canvas size grows
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let analyzer = Analyzer::new();

    for size in &[240_u32, 480, 960] {
        let Some(buffer) = synthetic_canvas(*size, *size, 4) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let result = analyzer.analyze(Some(black_box(&buffer)));
                black_box(result)
            });
        });
    }

    group.finish();
}

/// Measures the standalone Sobel edge stage on a mid-size canvas
fn bench_detect_edges(c: &mut Criterion) {
    let Some(buffer) = synthetic_canvas(480, 480, 4) else {
        return;
    };
    let config = AnalyzerConfig::default();

    c.bench_function("detect_edges", |b| {
        b.iter(|| {
            let edge_map = detect_edges(black_box(&buffer), &config);
            black_box(edge_map.edge_count())
        });
    });
}

criterion_group!(benches, bench_analyze, bench_detect_edges);
criterion_main!(benches);
