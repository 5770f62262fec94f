// Benchmarks for BN254 group and pairing operations

use bn254_pairing::{
    multi_miller_loop, pairing, pairing_check, G1Affine, G1Projective, G2Affine, G2Prepared,
    G2Projective, Scalar,
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::OsRng;

fn random_g1() -> G1Affine {
    G1Affine::from(G1Projective::random(OsRng))
}

fn random_g2() -> G2Affine {
    G2Affine::from(G2Projective::random(OsRng))
}

fn bench_group_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn254-groups");

    group.bench_function("g1-scalar-mult", |b| {
        b.iter_batched(
            || (G1Projective::random(OsRng), Scalar::random(OsRng)),
            |(p, s)| black_box(p * s),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("g2-scalar-mult", |b| {
        b.iter_batched(
            || (G2Projective::random(OsRng), Scalar::random(OsRng)),
            |(p, s)| black_box(p * s),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("g1-add", |b| {
        b.iter_batched(
            || (G1Projective::random(OsRng), G1Projective::random(OsRng)),
            |(p, q)| black_box(p + q),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn254-pairing");
    group.sample_size(20);

    group.bench_function("full-pairing", |b| {
        b.iter_batched(
            || (random_g1(), random_g2()),
            |(p, q)| black_box(pairing(&p, &q)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("g2-prepare", |b| {
        b.iter_batched(
            random_g2,
            |q| black_box(G2Prepared::from(q)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("miller-loop-prepared", |b| {
        b.iter_batched(
            || (random_g1(), G2Prepared::from(random_g2())),
            |(p, prep)| black_box(multi_miller_loop(&[(&p, &prep)])),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("final-exponentiation", |b| {
        b.iter_batched(
            || {
                let prep = G2Prepared::from(random_g2());
                multi_miller_loop(&[(&random_g1(), &prep)])
            },
            |mlr| black_box(mlr.final_exponentiation()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("pairing-check-2", |b| {
        b.iter_batched(
            || {
                let p = random_g1();
                let q = random_g2();
                ([p, G1Affine::from(-G1Projective::from(p))], [q, q])
            },
            |(g1s, g2s)| black_box(pairing_check(&g1s, &g2s).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_group_operations, bench_pairing);
criterion_main!(benches);
