use criterion::{Criterion, criterion_group, criterion_main};
use padtouch_slider::{HandTracker, find_segments};

fn benchmark_find_segments(c: &mut Criterion) {
    let patterns: [(&str, u32); 4] = [
        ("empty", 0),
        ("one_hand", 0x00F0_0000),
        ("two_hands", 0x0F00_00F0),
        ("noisy", 0xA5A5_5A5A),
    ];

    for (name, bits) in patterns {
        c.bench_function(&format!("find_segments {name}"), |b| {
            b.iter(|| std::hint::black_box(find_segments(std::hint::black_box(bits))));
        });
    }
}

fn benchmark_hand_tracker(c: &mut Criterion) {
    c.bench_function("HandTracker swipe", |b| {
        let mut tracker = HandTracker::new();
        let mut bits = 0xE000_0000u32;
        b.iter(|| {
            bits = bits.rotate_right(1);
            std::hint::black_box(tracker.update(bits));
        });
    });
}

criterion_group!(benches, benchmark_find_segments, benchmark_hand_tracker);
criterion_main!(benches);
