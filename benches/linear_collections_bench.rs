//! Criterion-based benchmarks for the linear containers
//!
//! Each container is measured next to the std collection it models.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::VecDeque;

use linear_collections::{
    ArrayStack, CircularQueue, DoublyLinkedList, GrowableArray, NodeQueue, NodeStack,
    SinglyLinkedList,
};

// =============================================================================
// BENCHMARK CONFIGURATION
// =============================================================================

const SMALL_SIZE: usize = 1_000;
const MEDIUM_SIZE: usize = 10_000;
const LARGE_SIZE: usize = 100_000;
const SIZES: &[usize] = &[SMALL_SIZE, MEDIUM_SIZE, LARGE_SIZE];

// =============================================================================
// GROWABLE ARRAY BENCHMARKS
// =============================================================================

fn bench_growable_array_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("growable_array_add");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = GrowableArray::new();
                for i in 0..size {
                    array.add(black_box(i as u64));
                }
                black_box(array)
            });
        });

        group.bench_with_input(BenchmarkId::new("std::Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_growable_array_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("growable_array_insert_front");

    for &size in &[SMALL_SIZE, MEDIUM_SIZE] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = GrowableArray::new();
                for i in 0..size {
                    array.insert_at(0, black_box(i as u32)).unwrap();
                }
                black_box(array)
            });
        });

        group.bench_with_input(BenchmarkId::new("std::Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.insert(0, black_box(i as u32));
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_growable_array_remove_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("growable_array_remove_all");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let source: Vec<u32> = (0..size as u32).map(|i| i % 7).collect();

        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &source, |b, source| {
            b.iter_batched(
                || GrowableArray::from_slice(source),
                |mut array| black_box(array.remove_all(&3)),
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("std::Vec::retain", size), &source, |b, source| {
            b.iter_batched(
                || source.clone(),
                |mut vec| {
                    vec.retain(|v| *v != 3);
                    black_box(vec.len())
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// QUEUE BENCHMARKS
// =============================================================================

fn bench_queue_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_enqueue_dequeue");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64 * 2));

        group.bench_with_input(BenchmarkId::new("CircularQueue", size), &size, |b, &size| {
            b.iter(|| {
                let mut queue = CircularQueue::new();
                for i in 0..size {
                    queue.enqueue(black_box(i));
                }
                let mut sum = 0usize;
                while let Ok(value) = queue.dequeue() {
                    sum = sum.wrapping_add(value);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("NodeQueue", size), &size, |b, &size| {
            b.iter(|| {
                let mut queue = NodeQueue::new();
                for i in 0..size {
                    queue.enqueue(black_box(i));
                }
                let mut sum = 0usize;
                while let Ok(value) = queue.dequeue() {
                    sum = sum.wrapping_add(value);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("std::VecDeque", size), &size, |b, &size| {
            b.iter(|| {
                let mut queue = VecDeque::new();
                for i in 0..size {
                    queue.push_back(black_box(i));
                }
                let mut sum = 0usize;
                while let Some(value) = queue.pop_front() {
                    sum = sum.wrapping_add(value);
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_queue_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_steady_state");
    group.throughput(Throughput::Elements(MEDIUM_SIZE as u64));

    // Wrap-around without growth once the buffer is warm
    group.bench_function("CircularQueue", |b| {
        let mut queue = CircularQueue::with_capacity(64).unwrap();
        for i in 0..32u64 {
            queue.enqueue(i);
        }
        b.iter(|| {
            for i in 0..MEDIUM_SIZE as u64 {
                queue.enqueue(black_box(i));
                black_box(queue.dequeue().unwrap());
            }
        });
    });

    group.bench_function("std::VecDeque", |b| {
        let mut queue: VecDeque<u64> = (0..32).collect();
        b.iter(|| {
            for i in 0..MEDIUM_SIZE as u64 {
                queue.push_back(black_box(i));
                black_box(queue.pop_front());
            }
        });
    });

    group.finish();
}

// =============================================================================
// STACK BENCHMARKS
// =============================================================================

fn bench_stack_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_push_pop");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64 * 2));

        group.bench_with_input(BenchmarkId::new("ArrayStack", size), &size, |b, &size| {
            b.iter(|| {
                let mut stack = ArrayStack::new();
                for i in 0..size {
                    stack.push(black_box(i));
                }
                while let Ok(value) = stack.pop() {
                    black_box(value);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("NodeStack", size), &size, |b, &size| {
            b.iter(|| {
                let mut stack = NodeStack::new();
                for i in 0..size {
                    stack.push(black_box(i));
                }
                while let Ok(value) = stack.pop() {
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// LINKED LIST BENCHMARKS
// =============================================================================

fn bench_linked_list_indexed_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_indexed_access");

    for &size in &[SMALL_SIZE, MEDIUM_SIZE] {
        group.throughput(Throughput::Elements(100));

        let singly: SinglyLinkedList<usize> = (0..size).collect();
        let doubly: DoublyLinkedList<usize> = (0..size).collect();

        // Indices skewed toward the tail, where the doubly linked walk is short
        let indices: Vec<usize> = (0..100).map(|i| size - 1 - (i * 7) % (size / 4)).collect();

        group.bench_with_input(BenchmarkId::new("SinglyLinkedList", size), &indices, |b, indices| {
            b.iter(|| {
                for &i in indices {
                    black_box(singly.get(i).unwrap());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("DoublyLinkedList", size), &indices, |b, indices| {
            b.iter(|| {
                for &i in indices {
                    black_box(doubly.get(i).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    array_benches,
    bench_growable_array_add,
    bench_growable_array_insert_front,
    bench_growable_array_remove_all
);

criterion_group!(queue_benches, bench_queue_throughput, bench_queue_steady_state);

criterion_group!(stack_benches, bench_stack_push_pop);

criterion_group!(list_benches, bench_linked_list_indexed_access);

criterion_main!(array_benches, queue_benches, stack_benches, list_benches);
