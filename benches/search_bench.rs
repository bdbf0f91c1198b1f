use catalog_rank::{build_index, Document, Index};
use criterion::{criterion_group, criterion_main, Criterion};

/// tiny deterministic PRNG (xorshift32)
struct Rng(u32);
impl Rng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

fn synthetic_corpus(docs: usize, words_per_doc: usize) -> Vec<Document> {
    let mut rng = Rng(0xc0ffee);
    (0..docs)
        .map(|_| {
            let text: Vec<String> = (0..words_per_doc)
                .map(|_| format!("word{}", rng.next_u32() % 2000))
                .collect();
            Document::from(text.join(" "))
        })
        .collect()
}

fn build_and_search(c: &mut Criterion) {
    let corpus = synthetic_corpus(5_000, 30);

    c.bench_function("build_index_5k_docs", |b| {
        b.iter(|| build_index::<f32>(&corpus, Some(3000)).unwrap())
    });

    let index: Index<f32> = build_index(&corpus, Some(3000)).unwrap();
    c.bench_function("search_top10_5k_docs", |b| {
        b.iter(|| index.search("word12 word345 word678 word901", 10).unwrap())
    });
}

criterion_group!(benches, build_and_search);
criterion_main!(benches);
