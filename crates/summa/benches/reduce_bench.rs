//! Benchmarks comparing the reduction cogs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use summa::prelude::*;

type F32003 = FiniteField<32003>;

/// The cyclic-3 style reducers `{x^2 - y*z, y^2 - x*z + 1, z^2 - x*y}`.
fn reducers<C: Ring + From<i64>>(ring: &SparsePolyRing<C>) -> Vec<SparsePoly<C>> {
    let one = C::from(1);
    let neg = C::from(-1);
    vec![
        ring.from_exponents(vec![(one.clone(), &[2, 0, 0][..]), (neg.clone(), &[0, 1, 1][..])])
            .unwrap(),
        ring.from_exponents(vec![
            (one.clone(), &[0, 2, 0][..]),
            (neg.clone(), &[1, 0, 1][..]),
            (one.clone(), &[0, 0, 0][..]),
        ])
        .unwrap(),
        ring.from_exponents(vec![(one, &[0, 0, 2][..]), (neg, &[1, 1, 0][..])])
            .unwrap(),
    ]
}

/// `(x + 2y + 3z + 1)^degree`.
fn input<C: Ring + From<i64>>(ring: &SparsePolyRing<C>, degree: u32) -> SparsePoly<C> {
    let base = ring
        .from_exponents(vec![
            (C::from(1), &[1, 0, 0][..]),
            (C::from(2), &[0, 1, 0][..]),
            (C::from(3), &[0, 0, 1][..]),
            (C::from(1), &[0, 0, 0][..]),
        ])
        .unwrap();
    let mut acc = ring.one();
    for _ in 0..degree {
        acc = acc.mul(&base).unwrap();
    }
    acc
}

fn bench_field_cogs(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_form_f32003");
    let ring: SparsePolyRing<F32003> = SparsePolyRing::with_indets(3);
    let gs = reducers(&ring);

    for degree in [4u32, 8, 12] {
        let f = input(&ring, degree);

        group.bench_with_input(BenchmarkId::new("PolyField", degree), &degree, |b, _| {
            let mut cog = new_red_cog_poly_field(&ring);
            b.iter(|| {
                let mut p = f.clone();
                normal_form(cog.as_mut(), &mut p, &gs).unwrap();
                black_box(p)
            });
        });

        group.bench_with_input(BenchmarkId::new("GeobucketField", degree), &degree, |b, _| {
            let mut cog = new_red_cog_geobucket_field(&ring);
            b.iter(|| {
                let mut p = f.clone();
                normal_form(cog.as_mut(), &mut p, &gs).unwrap();
                black_box(p)
            });
        });
    }

    group.finish();
}

fn bench_gcd_cogs(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_form_z");
    let ring: SparsePolyRing<Z> = SparsePolyRing::with_indets(3);
    let gs = reducers(&ring);

    for degree in [4u32, 6, 8] {
        let f = input(&ring, degree);

        group.bench_with_input(BenchmarkId::new("PolyGCD", degree), &degree, |b, _| {
            let mut cog = new_red_cog_poly_gcd(&ring);
            b.iter(|| {
                let mut p = f.clone();
                normal_form(cog.as_mut(), &mut p, &gs).unwrap();
                black_box(p)
            });
        });

        group.bench_with_input(BenchmarkId::new("GeobucketGCD", degree), &degree, |b, _| {
            let mut cog = new_red_cog_geobucket_gcd(&ring);
            b.iter(|| {
                let mut p = f.clone();
                normal_form(cog.as_mut(), &mut p, &gs).unwrap();
                black_box(p)
            });
        });
    }

    group.finish();
}

criterion_group!(reduce_benches, bench_field_cogs, bench_gcd_cogs);
criterion_main!(reduce_benches);
