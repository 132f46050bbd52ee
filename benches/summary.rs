// benches/summary.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use casp_extract::{groups, specs::summary};

/// Synthetic summary about the size of a large CASP14 domain file.
fn sample(rows: usize) -> String {
    let mut s = String::from(
        "NAME                               N1    N2   DIST     N    RMSD   GDT_TS   LGA_S3   LGA_Q\n",
    );
    for i in 0..rows {
        let group = i % 150;
        let model = i % 5 + 1;
        s.push_str(&format!(
            "T1024TS{group:03}_{model}-D1:SUMMARY(GDT).lga   408   408    5.0   369  {:>6.2}  {:>7.3}   80.000   0.357\n",
            1.0 + (i % 17) as f32 * 0.5,
            40.0 + (i % 60) as f32 * 0.75,
        ));
    }
    s
}

fn bench_summary(c: &mut Criterion) {
    let doc = sample(750);

    c.bench_function("summary_parse", |b| {
        b.iter(|| {
            let table = summary::parse(black_box(&doc)).into_table();
            black_box(table.len())
        })
    });

    let table = summary::parse(&doc).into_table();
    c.bench_function("summary_aggregate", |b| {
        b.iter(|| {
            let grouped = groups::aggregate(std::iter::once(black_box(table.clone())));
            black_box(grouped.len())
        })
    });
}

criterion_group!(benches, bench_summary);
criterion_main!(benches);
