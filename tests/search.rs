use std::sync::Arc;
use std::thread;

use catalog_rank::{
    build_index, project, rank, Document, Error, Index, SharedIndex, SparseVector,
    DEFAULT_MAX_FEATURES,
};

fn furniture_corpus() -> Vec<Document> {
    vec![
        Document {
            title: "Oslo armchair".into(),
            description: "Curved back armchair with oak legs".into(),
            category: "Chair".into(),
            brand: "Nordica".into(),
            material: "oak".into(),
            color: "green".into(),
        },
        Document {
            title: "Velvet sofa".into(),
            description: "Three seat sofa in deep blue velvet".into(),
            category: "Sofa".into(),
            brand: "Nordica".into(),
            material: "velvet".into(),
            color: "blue".into(),
        },
        Document {
            title: "Office chair".into(),
            description: "Adjustable office chair with lumbar support".into(),
            category: "Chair".into(),
            brand: "Ergo".into(),
            material: "mesh".into(),
            color: "black".into(),
        },
        Document {
            title: "Dining table".into(),
            description: "Extendable dining table, seats eight".into(),
            category: "Table".into(),
            brand: "Nordica".into(),
            material: "walnut".into(),
            color: "brown".into(),
        },
    ]
}

#[test]
fn end_to_end_search_finds_the_right_item() {
    let index: Index<f32> = build_index(&furniture_corpus(), Some(DEFAULT_MAX_FEATURES)).unwrap();
    let hits = index.search("office chair", 2).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].item, 2);
    assert_eq!(hits[0].rank, 1);
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn spec_scenario_red_chair() {
    let corpus: Vec<Document> = ["red chair", "blue chair", "red table"]
        .iter()
        .map(|t| Document::from(*t))
        .collect();
    let index: Index<f64> = build_index(&corpus, None).unwrap();
    let hits = index.search("red chair", 2).unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].item, 0);
    assert!((hits[0].score - 1.0).abs() < 1e-9);
    // items 1 and 2 have equal overlap; the tie resolves to the lower id
    assert_eq!(hits[1].item, 1);
}

#[test]
fn unmatchable_query_is_not_an_error() {
    let index: Index<f32> = build_index(&furniture_corpus(), None).unwrap();
    let hits = index.search("zzz nonexistent term", 10).unwrap();
    assert_eq!(hits.len(), 4);
    assert!(hits.iter().all(|h| h.score == 0.0));
    // deterministic tie-break: ascending item ids
    let items: Vec<u32> = hits.iter().map(|h| h.item).collect();
    assert_eq!(items, vec![0, 1, 2, 3]);
}

#[test]
fn contract_errors() {
    assert!(matches!(
        build_index::<f32>(&[], None),
        Err(Error::EmptyCorpus)
    ));

    let index: Index<f32> = build_index(&furniture_corpus(), None).unwrap();
    assert!(matches!(
        index.search("chair", 0),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        index.search_raw(&[0xff, 0xfe, 0x61], 3),
        Err(Error::InvalidQuery(_))
    ));
}

#[test]
fn results_are_sorted_and_ranked() {
    let index: Index<f32> = build_index(&furniture_corpus(), None).unwrap();
    let hits = index.search("blue velvet chair nordica", 4).unwrap();
    assert_eq!(hits.len(), 4);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for (i, hit) in hits.iter().enumerate() {
        assert_eq!(hit.rank, i + 1);
        assert!((0.0..=1.0).contains(&hit.score));
    }
}

#[test]
fn rebuild_is_bit_identical() {
    let corpus = furniture_corpus();
    let a: Index<f32> = build_index(&corpus, Some(16)).unwrap();
    let b: Index<f32> = build_index(&corpus, Some(16)).unwrap();
    let bytes_a = serde_cbor::to_vec(&a).unwrap();
    let bytes_b = serde_cbor::to_vec(&b).unwrap();
    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn cached_query_vectors_match_text_search() {
    let index: Index<f64> = build_index(&furniture_corpus(), None).unwrap();
    let q: SparseVector<f64> = project("dining table walnut", index.vocabulary());
    let via_rank = rank(&q, &index, 3).unwrap();
    let via_search = index.search("dining table walnut", 3).unwrap();
    assert_eq!(via_rank, via_search);
}

#[test]
fn concurrent_queries_share_one_index() {
    let index: Arc<Index<f32>> = Arc::new(build_index(&furniture_corpus(), None).unwrap());
    let queries = ["office chair", "blue sofa", "walnut table", "oak armchair"];

    let handles: Vec<_> = queries
        .iter()
        .map(|q| {
            let index = Arc::clone(&index);
            let q = q.to_string();
            thread::spawn(move || index.search(&q, 2).unwrap())
        })
        .collect();
    for handle in handles {
        let hits = handle.join().unwrap();
        assert_eq!(hits.len(), 2);
    }
}

#[test]
fn published_rebuild_does_not_tear_readers() {
    let shared = SharedIndex::new(build_index::<f32>(&furniture_corpus(), None).unwrap());

    // a reader takes its snapshot before the rebuild lands
    let snapshot = shared.load();
    let before = snapshot.search("office chair", 1).unwrap();

    let mut bigger = furniture_corpus();
    bigger.push(Document::from("red gaming chair with headrest"));
    shared.publish(build_index(&bigger, None).unwrap());

    // the snapshot still answers from the old corpus
    assert_eq!(snapshot.search("office chair", 1).unwrap(), before);
    assert_eq!(shared.load().len(), 5);
}
