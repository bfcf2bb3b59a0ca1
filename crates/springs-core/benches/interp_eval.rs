use criterion::{black_box, criterion_group, criterion_main, Criterion};
use springs_core::{AnimatedValue, InterpolateSpec, Value};

fn bench_interp_eval(c: &mut Criterion) {
    let root = AnimatedValue::new(Value::n(0.0)).unwrap();
    let numeric = root
        .interpolate(
            InterpolateSpec::arrays(
                vec![0.0, 0.25, 0.5, 0.75, 1.0],
                vec![
                    Value::n(0.0),
                    Value::n(10.0),
                    Value::n(5.0),
                    Value::n(80.0),
                    Value::n(100.0),
                ],
            )
            .unwrap(),
        )
        .unwrap();
    let color = root
        .interpolate(
            InterpolateSpec::arrays(
                vec![0.0, 0.5, 1.0],
                vec![Value::t("yellow"), Value::t("orange"), Value::t("red")],
            )
            .unwrap(),
        )
        .unwrap();

    c.bench_function("numeric_range_tick", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x = (x + 0.013) % 1.0;
            root.set(Value::n(x)).unwrap();
            black_box(numeric.get_value())
        })
    });

    c.bench_function("color_range_tick", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x = (x + 0.013) % 1.0;
            root.set(Value::n(x)).unwrap();
            black_box(color.get_value())
        })
    });
}

criterion_group!(benches, bench_interp_eval);
criterion_main!(benches);
