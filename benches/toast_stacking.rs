// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast stacking.
//!
//! Measures the performance of:
//! - Offset computation for a stack of mixed-height toasts
//! - Showing a burst of toasts
//! - Dismissing from the top of a full stack (full reflow each time)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toasts::toast::{Manager, ManualScheduler, ToastSettings};
use iced_toasts::ui::toast_card::CardFactory;
use std::hint::black_box;

const STACK_SIZES: [usize; 3] = [4, 16, 64];

fn message(index: usize) -> String {
    "Notification text ".repeat(1 + index % 4)
}

fn full_stack(count: usize) -> Manager<CardFactory, ManualScheduler> {
    let settings = ToastSettings::default();
    let mut manager = Manager::with_settings(
        CardFactory::with_default_templates(settings.exit_transition),
        ManualScheduler::new(),
        settings,
    );
    for index in 0..count {
        manager.show("info", &message(index), None);
    }
    manager
}

fn bench_stack_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_stacking");
    let settings = ToastSettings::default();

    for size in STACK_SIZES {
        let heights: Vec<f32> = (0..size).map(|i| 40.0 + (i % 3) as f32 * 18.2).collect();
        group.bench_with_input(BenchmarkId::new("stack_offsets", size), &heights, |b, h| {
            b.iter(|| black_box(settings.stack_offsets(black_box(h))));
        });
    }

    group.finish();
}

fn bench_show_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_stacking");

    for size in STACK_SIZES {
        group.bench_with_input(BenchmarkId::new("show_burst", size), &size, |b, &size| {
            b.iter(|| black_box(full_stack(size)));
        });
    }

    group.finish();
}

fn bench_dismiss_reflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_stacking");
    let settings = ToastSettings::default();

    for size in STACK_SIZES {
        group.bench_with_input(BenchmarkId::new("dismiss_all", size), &size, |b, &size| {
            b.iter_batched(
                || full_stack(size),
                |mut manager| {
                    let ids: Vec<_> = manager.iter().map(|(id, _)| id).collect();
                    for id in ids {
                        manager.dismiss(id);
                        manager.advance(settings.exit_transition);
                    }
                    black_box(manager)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_stack_offsets,
    bench_show_burst,
    bench_dismiss_reflow
);
criterion_main!(benches);
