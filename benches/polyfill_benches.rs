use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xs_hexgrid::*;

fn square(lat0: f64, lng0: f64, size: f64) -> GeoLoop {
  GeoLoop::new(vec![
    LatLng::from_degrees(lat0, lng0),
    LatLng::from_degrees(lat0, lng0 + size),
    LatLng::from_degrees(lat0 + size, lng0 + size),
    LatLng::from_degrees(lat0 + size, lng0),
  ])
}

fn simple_polygon() -> GeoPolygon {
  GeoPolygon::new(square(37.7, -122.5, 0.1), Vec::new())
}

fn donut_polygon() -> GeoPolygon {
  GeoPolygon::new(square(37.7, -122.5, 0.1), vec![square(37.73, -122.47, 0.04)])
}

fn bench_polygon_to_cells(c: &mut Criterion) {
  let simple = simple_polygon();
  let donut = donut_polygon();
  let mut group = c.benchmark_group("polygon_to_cells");
  for res in [6u8, 8, 9] {
    group.bench_with_input(format!("simple_res_{res}"), &res, |b, &r| {
      b.iter(|| polygon_to_cells(black_box(&simple), r, ContainmentMode::Center).map(Iterator::count));
    });
    group.bench_with_input(format!("donut_res_{res}"), &res, |b, &r| {
      b.iter(|| polygon_to_cells(black_box(&donut), r, ContainmentMode::Center).map(Iterator::count));
    });
  }
  group.finish();
}

fn bench_containment_modes(c: &mut Criterion) {
  let poly = simple_polygon();
  let mut group = c.benchmark_group("containment_mode");
  for mode in [ContainmentMode::Center, ContainmentMode::Full, ContainmentMode::Overlapping] {
    group.bench_with_input(format!("{mode:?}"), &mode, |b, &m| {
      b.iter(|| polygon_to_cells(black_box(&poly), 8, m).map(Iterator::count));
    });
  }
  group.finish();
}

criterion_group!(polyfill_benches, bench_polygon_to_cells, bench_containment_modes);
criterion_main!(polyfill_benches);
