use colorview::{Color, Size, SwatchConfig, SwatchRenderer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_render(c: &mut Criterion) {
    let renderer = SwatchRenderer::from_config(&SwatchConfig {
        color: Color::from_argb(0x80FF_0000),
        ..SwatchConfig::default()
    });

    c.bench_function("render 40x40", |b| {
        b.iter(|| renderer.render(black_box(Size::new(40, 40))))
    });
    c.bench_function("render 512x256 rounded", |b| {
        b.iter(|| renderer.render(black_box(Size::new(512, 256))))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
