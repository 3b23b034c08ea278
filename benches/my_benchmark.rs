use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seq_list::{seq_test, SeqList};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("seq_test", |b| b.iter(|| seq_test(black_box(1_000))));

    c.bench_function("push_front", |b| {
        b.iter(|| {
            let mut list = SeqList::new();
            for elem in 0..10_000 {
                list.push_front(black_box(elem));
            }
            list
        })
    });

    c.bench_function("remove_first_tail", |b| {
        let mut list = SeqList::new();
        for elem in 0..1_000 {
            list.push_back(elem);
        }
        b.iter(|| {
            list.remove_first(black_box(&999));
            list.push_back(999);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
