use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use xs_folio_map::data::{default_location_table, world_regions};
use xs_folio_map::*;

// --- Fixtures for render benchmarks ---

fn projected_outlines(resolution: CoastlineResolution) -> Vec<Vec<PlanarPoint>> {
  let canvas = Canvas::default();
  world_regions(resolution)
    .iter()
    .map(|r| project_all(&r.outline, &canvas))
    .collect()
}

fn bench_to_path(c: &mut Criterion) {
  let mut group = c.benchmark_group("to_path");
  for resolution in [CoastlineResolution::Coarse, CoastlineResolution::Fine] {
    let outlines = projected_outlines(resolution);
    group.bench_function(format!("{resolution:?}"), |b| {
      b.iter(|| {
        for ring in &outlines {
          black_box(to_path(black_box(ring)));
        }
      });
    });
  }
  group.finish();
}

fn bench_to_view_box(c: &mut Criterion) {
  let canvas = Canvas::default();
  let outlines = projected_outlines(CoastlineResolution::Fine);

  c.bench_function("to_view_box_fine", |b| {
    b.iter(|| {
      for ring in &outlines {
        black_box(to_view_box(black_box(ring), DEFAULT_VIEWBOX_PADDING, &canvas));
      }
    });
  });
}

fn bench_render_map(c: &mut Criterion) {
  let config = MapConfig::default();
  let regions = world_regions(CoastlineResolution::Fine);
  let table = default_location_table();
  let projects = vec![
    ProjectRecord::named("I-69 Widening"),
    ProjectRecord::named("Madrid Calle 30"),
    ProjectRecord::named("Lima Metro Line 2"),
  ];

  // Markers borrow from projects and table, so rebuild them per batch.
  c.bench_function("render_map_fine", |b| {
    b.iter_batched(
      || build_markers(&projects, &table, &config.canvas),
      |markers| render_map(black_box(&config), black_box(&regions), black_box(&markers)),
      BatchSize::SmallInput,
    );
  });
}

criterion_group!(render_benches, bench_to_path, bench_to_view_box, bench_render_map);
criterion_main!(render_benches);
