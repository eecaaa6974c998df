//! Suffix trie benchmarks
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`
//!
//! Word lengths are kept modest: the trie is O(n^2) in nodes, so build
//! cost grows quadratically with the word.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use sxi::index::SuffixTrie;

/// Deterministic pseudo-random word over a small alphabet
fn gen_word(len: usize, alphabet: &[char]) -> String {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            alphabet[(state >> 33) as usize % alphabet.len()]
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let alphabet = ['a', 'b', 'c', 'd'];

    let mut group = c.benchmark_group("build");
    group.sample_size(20);

    for len in [128, 512, 1024] {
        let word = gen_word(len, &alphabet);
        group.bench_function(format!("build_{}", len), |b| {
            b.iter(|| SuffixTrie::build(black_box(&word)))
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let word = gen_word(512, &['a', 'b', 'c', 'd']);
    let trie = SuffixTrie::build(&word);

    // A pattern that actually occurs, taken from the middle of the word
    let pattern: String = word.chars().skip(100).take(12).collect();
    let missing = "dcbadcbadcbax";

    let mut group = c.benchmark_group("queries");

    group.bench_function("contains_hit", |b| {
        b.iter(|| trie.contains(black_box(&pattern)))
    });
    group.bench_function("contains_miss", |b| {
        b.iter(|| trie.contains(black_box(missing)))
    });
    group.bench_function("find_position", |b| {
        b.iter(|| trie.find_position(black_box(&pattern)))
    });
    group.bench_function("longest_repeated", |b| b.iter(|| trie.longest_repeated()));
    group.bench_function("most_repeated", |b| b.iter(|| trie.most_repeated()));

    group.finish();
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
