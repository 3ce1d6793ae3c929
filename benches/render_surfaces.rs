use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use viz_bench::core::actions::run_benchmark::ports::frame_workload::FrameWorkload;
use viz_bench::core::signals::ripple::RippleDeformer;
use viz_bench::core::signals::sensor_signals::SensorSignals;
use viz_bench::presenters::file::png::PngFilePresenter;
use viz_bench::surfaces::line_chart::chart::LineChart;
use viz_bench::surfaces::mesh::ellipsoid::parametric_ellipsoid;
use viz_bench::surfaces::mesh::plotter::MeshPlotter;
use viz_bench::workloads::line_chart::LineChartWorkload;
use viz_bench::workloads::mesh_deformation::MeshDeformationWorkload;

fn bench_line_chart_frame(c: &mut Criterion) {
    let mut workload = LineChartWorkload::new(
        LineChart::new().unwrap(),
        SensorSignals::with_seed(42).unwrap(),
        std::env::temp_dir().join("viz_bench_line_chart.png"),
        300,
        PngFilePresenter::new(),
    )
    .unwrap();
    let mut frame_index = 0;

    c.bench_function("line_chart_frame", |b| {
        b.iter(|| {
            workload.prepare_frame(black_box(frame_index)).unwrap();
            workload.render_frame().unwrap();
            frame_index = frame_index.wrapping_add(1);
        })
    });
}

fn bench_mesh_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_frame");

    for resolution in [16_u32, 50, 100] {
        let mut workload = MeshDeformationWorkload::new(
            MeshPlotter::new(800, 600).unwrap(),
            parametric_ellipsoid(1.0, 0.35, 0.18, resolution, resolution).unwrap(),
            RippleDeformer::default(),
            std::env::temp_dir().join("viz_bench_mesh.png"),
            PngFilePresenter::new(),
        )
        .unwrap();
        let mut frame_index = 0;

        group.bench_with_input(BenchmarkId::from_parameter(resolution), &resolution, |b, _| {
            b.iter(|| {
                workload.prepare_frame(black_box(frame_index)).unwrap();
                workload.render_frame().unwrap();
                frame_index = frame_index.wrapping_add(1);
            })
        });
    }

    group.finish();
}

fn bench_line_chart_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_chart_save_figure");
    group.sample_size(10);

    let mut chart = LineChart::new().unwrap();
    chart.draw().unwrap();

    for dpi in [100_u32, 300] {
        group.bench_with_input(BenchmarkId::from_parameter(dpi), &dpi, |b, &dpi| {
            let path = std::env::temp_dir().join(format!("viz_bench_snapshot_{}.png", dpi));
            b.iter(|| chart.save_figure(&path, dpi, &PngFilePresenter::new()).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_line_chart_frame,
    bench_mesh_frame,
    bench_line_chart_snapshot
);
criterion_main!(benches);
