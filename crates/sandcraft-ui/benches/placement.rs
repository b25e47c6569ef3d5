//! Benchmarks for nine-slice placement.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sandcraft_types::backend::{ImageRegion, TextureId};
use sandcraft_ui::nine_slice::{NineSliceSprite, SliceLayout, compute_placement, slice_image};

fn bench_compute_placement(c: &mut Criterion) {
    let image = ImageRegion::full(TextureId(1), 200, 20);
    let regions = slice_image(&image, 3).expect("valid image");
    let layout = SliceLayout {
        x: 12.0,
        y: 40.0,
        scale_x: 2.0,
        scale_y: 2.0,
        border_width: 4.0,
    };
    c.bench_function("compute_placement", |b| {
        b.iter(|| compute_placement(std::hint::black_box(&layout), &image, &regions))
    });
}

fn bench_rescale(c: &mut Criterion) {
    let mut group = c.benchmark_group("rescale");

    for border in [1u32, 4, 16] {
        let image = ImageRegion::full(TextureId(1), 64, 64);
        let mut sprite =
            NineSliceSprite::with_border(image, 0.0, 0.0, border, 2.0).expect("valid image");
        group.bench_with_input(BenchmarkId::from_parameter(border), &border, |b, _| {
            let mut scale = 1.0f32;
            b.iter(|| {
                scale = if scale > 8.0 { 1.0 } else { scale + 0.25 };
                sprite.set_scale(scale);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_placement, bench_rescale);
criterion_main!(benches);
