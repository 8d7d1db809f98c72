use criterion::{black_box, criterion_group, criterion_main, Criterion};
use photo_plan_core::{Camera, DatasetSpec};
use photo_plan_grid::{generate_photo_plan_on_grid, PhotoPlanner};

fn camera() -> Camera {
    Camera {
        fx: 2964.0,
        fy: 2964.0,
        cx: 2000.0,
        cy: 1500.0,
        sensor_size_x_mm: 6.17,
        sensor_size_y_mm: 4.55,
        image_size_x_px: 4000,
        image_size_y_px: 3000,
    }
}

// 1 km x 1 km at 30 m with 80 % overlap: roughly 20k waypoints.
fn large_survey() -> DatasetSpec {
    DatasetSpec {
        overlap: 0.8,
        sidelap: 0.8,
        height: 30.0,
        scan_dimension_x: 1000.0,
        scan_dimension_y: 1000.0,
        exposure_time_ms: 1.0,
    }
}

fn bench_grid_plan(c: &mut Criterion) {
    let cam = camera();
    let spec = large_survey();

    c.bench_function("plan_materialized", |b| {
        b.iter(|| generate_photo_plan_on_grid(black_box(&cam), black_box(&spec)))
    });

    let planner = PhotoPlanner::default();
    c.bench_function("plan_lazy_sum_x", |b| {
        b.iter(|| {
            let layout = planner
                .layout(black_box(&cam), black_box(&spec))
                .expect("layout");
            layout.iter().map(|w| w.x).sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_grid_plan);
criterion_main!(benches);
