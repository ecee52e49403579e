use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use echo_grid::{
    Control, Handle, NoteMapping, Resolution, ResourceKind, RuntimeHost, Sequencer, SoundId,
    quantize,
};
use rand::Rng;

/// Host that does the minimum possible work.
#[derive(Default)]
struct NullHost {
    next: u64,
}

impl RuntimeHost for NullHost {
    fn create(&mut self, _kind: ResourceKind) -> Handle {
        self.next += 1;
        Handle(self.next)
    }

    fn destroy(&mut self, _handle: Handle) {}

    fn start_sound(&mut self, _instance: Handle, _sound: SoundId, _volume: f64) {}
}

fn bench_quantization(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantize");
    let mut rng = rand::thread_rng();
    let times: Vec<f64> = (0..1024).map(|_| rng.r#gen::<f64>() * 5.0).collect();

    for resolution in [
        Resolution::Off,
        Resolution::Whole,
        Resolution::Quarter,
        Resolution::Eighth,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", resolution)),
            &resolution,
            |b, &resolution| {
                b.iter(|| {
                    for &t in &times {
                        black_box(quantize(t, resolution));
                    }
                });
            },
        );
    }
    group.finish();
}

/// A take filled with notes across the whole timeline.
fn full_engine(notes: usize) -> (Sequencer, NullHost) {
    let mut seq = Sequencer::new(NoteMapping::with_defaults());
    let mut host = NullHost::default();

    seq.handle_control(Control::Note(0), &mut host).unwrap();
    let tick = 5.0 / notes as f64;
    for i in 1..notes {
        seq.tick(tick, &mut host).unwrap();
        seq.handle_control(Control::Note((i % 7) as u8), &mut host)
            .unwrap();
    }
    seq.handle_control(Control::PlayStop, &mut host).unwrap();
    (seq, host)
}

fn bench_sweep_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");

    for notes in [16usize, 64, 256] {
        let (seq, _host) = full_engine(notes);
        group.bench_with_input(BenchmarkId::from_parameter(notes), &notes, |b, _| {
            b.iter(|| {
                let hits: usize = seq.store().notes_in_sweep(black_box(2.4), 2.6).count();
                black_box(hits)
            });
        });
    }
    group.finish();
}

fn bench_playback_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for notes in [16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(notes), &notes, |b, &notes| {
            b.iter_batched(
                || full_engine(notes),
                |(mut seq, mut host)| {
                    seq.handle_control(Control::PlayStop, &mut host).unwrap();
                    for _ in 0..300 {
                        black_box(seq.tick(1.0 / 60.0, &mut host).unwrap());
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_quantization,
    bench_sweep_query,
    bench_playback_tick
);
criterion_main!(benches);
