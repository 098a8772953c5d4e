use bioseq_kit::{Dna, FastaRecord};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn random_dna(len: usize) -> String {
    let bases = ['A', 'C', 'G', 'T'];
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| *bases.choose(&mut rng).unwrap())
        .collect()
}

fn bench_strand_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("strand");

    for len in [1_000, 100_000] {
        let dna = Dna::new(random_dna(len));
        let rna = dna.transcribe();

        group.bench_with_input(BenchmarkId::new("count", len), &dna, |b, dna| {
            b.iter(|| black_box(dna.count()))
        });
        group.bench_with_input(BenchmarkId::new("reverse_complement", len), &dna, |b, dna| {
            b.iter(|| black_box(dna.reverse_complement().unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("translate", len), &rna, |b, rna| {
            b.iter(|| black_box(rna.translate().unwrap()))
        });
    }

    group.finish();
}

fn bench_fasta_parse(c: &mut Criterion) {
    let body: Vec<String> = random_dna(60_000)
        .as_bytes()
        .chunks(60)
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect();
    let text = format!(">bench\n{}\n", body.join("\n"));

    c.bench_function("fasta_parse_60k", |b| {
        b.iter(|| black_box(FastaRecord::parse(&text).unwrap()))
    });
}

criterion_group!(benches, bench_strand_ops, bench_fasta_parse);
criterion_main!(benches);
