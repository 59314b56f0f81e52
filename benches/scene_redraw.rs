use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use paintstamp::{
    draw_fixed_picture, DrawTarget, PointerButtons, PointerEvent, Session, SessionConfig, Tool,
};
use paintstamp_test_scenes::RecordingTarget;

const CANVAS: (u32, u32) = (800, 600);

/// A session holding one long zig-zag stroke of the given tool.
fn stroked_session(tool: Tool, strokes: usize) -> Session {
    let mut session = Session::new(SessionConfig::default().with_tool(tool), CANVAS);
    session.on_pointer(&PointerEvent::down(10.0, 10.0));
    for i in 0..strokes {
        let x = (i % 2) as f32 * 780.0 + 10.0;
        let y = (i as f32 * 7.0) % 580.0 + 10.0;
        session.on_pointer(&PointerEvent::moved(x, y, PointerButtons::PRIMARY));
    }
    session.on_pointer(&PointerEvent::up(10.0, 10.0));
    session
}

fn bench_scene_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_redraw");

    for (name, tool) in [
        ("square", Tool::Square),
        ("triangle", Tool::Triangle),
        ("circle", Tool::Circle),
    ] {
        let session = stroked_session(tool, 40);
        let mut target = RecordingTarget::new(CANVAS);

        group.bench_with_input(
            BenchmarkId::new(name, session.scene().len()),
            &session,
            |b, session| {
                b.iter(|| {
                    target.redraw(black_box(session.scene()));
                    black_box(target.draws.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_fixed_picture(c: &mut Criterion) {
    let mut target = RecordingTarget::new(CANVAS);
    c.bench_function("fixed_picture", |b| {
        b.iter(|| {
            draw_fixed_picture(&mut target);
            black_box(target.draws.len())
        })
    });
}

criterion_group!(benches, bench_scene_redraw, bench_fixed_picture);
criterion_main!(benches);
