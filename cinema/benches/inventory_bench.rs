use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use cinema::SeatInventory;

const ROOM_SIDES: &[i64] = &[10, 100, 500];

fn half_sold_room(side: i64) -> SeatInventory {
    let mut room = SeatInventory::new(side, side).expect("failed to create benchmark room");
    for row in 1..=side {
        for seat in (1..=side).step_by(2) {
            room.purchase(row, seat)
                .expect("failed to purchase benchmark seat");
        }
    }
    room
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    for &side in ROOM_SIDES {
        let room = half_sold_room(side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &room, |b, room| {
            b.iter(|| black_box(room.metrics()));
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    for &side in ROOM_SIDES {
        let room = half_sold_room(side);
        group.bench_with_input(BenchmarkId::from_parameter(side), &room, |b, room| {
            b.iter(|| black_box(room.snapshot()));
        });
    }
    group.finish();
}

fn bench_sell_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("sell_out");
    for &side in &ROOM_SIDES[..2] {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            b.iter_batched(
                || SeatInventory::new(side, side).expect("failed to create benchmark room"),
                |mut room| {
                    for row in 1..=side {
                        for seat in 1..=side {
                            black_box(room.purchase(row, seat).ok());
                        }
                    }
                    room
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_metrics, bench_snapshot, bench_sell_out);
criterion_main!(benches);
