//! # Drive Control Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swerve_lib::{
    drive_ctrl::{calc_targets, DisableSignal, DriveCtrl, Params, PowerCmd},
    sim_module::{self, SimModule},
};

fn drive_ctrl_benchmark(c: &mut Criterion) {
    // ---- Build the controller ----

    let params: Params = util::params::from_toml_str(
        r#"
        half_width = 14.0
        half_length = 14.0
        geometry_unit_m = 0.0254
        module_offsets_m = [
            [-0.3556, 0.3556],
            [0.3556, 0.3556],
            [-0.3556, -0.3556],
            [0.3556, -0.3556]
        ]
        geometry_tolerance_m = 0.001
        alignment_threshold = 0.7

        [steer_constants]
        proportional = 0.2
        derivative = 0.0
        "#,
    )
    .unwrap();

    let sim_params = sim_module::Params {
        steer_rate_degs_per_volt: 60.0,
        drive_speed_per_volt: 0.1,
        drive_time_const_s: 0.1,
        initial_angle_deg: 0.0,
    };

    let modules = [
        SimModule::new(&sim_params),
        SimModule::new(&sim_params),
        SimModule::new(&sim_params),
        SimModule::new(&sim_params),
    ];

    let mut drive_ctrl = DriveCtrl::new(modules, &params, DisableSignal::default()).unwrap();

    let cmd = PowerCmd::new(9.0, 30.0, 8.0).lenient();

    // Bench the target calculation alone
    c.bench_function("drive_ctrl::calc_targets", |b| {
        b.iter(|| calc_targets(black_box(drive_ctrl.geometry()), black_box(&cmd)).unwrap())
    });

    // Bench a full cycle
    c.bench_function("DriveCtrl::power + tick", |b| {
        b.iter(|| {
            drive_ctrl.power(black_box(&cmd)).unwrap();
            drive_ctrl.tick(black_box(0.02))
        })
    });
}

criterion_group!(benches, drive_ctrl_benchmark);
criterion_main!(benches);
