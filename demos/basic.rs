use catalog_rank::{build_index, Document, Index, DEFAULT_MAX_FEATURES};

fn main() {
    // build a small catalog
    let catalog = vec![
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
    ];

    // index once, then query the immutable index
    let index: Index<f32> = build_index(&catalog, Some(DEFAULT_MAX_FEATURES)).unwrap();

    let hits = index.search("comfortable office chair", 2).unwrap();
    for hit in &hits {
        println!(
            "#{} {} (score {:.4})",
            hit.rank,
            catalog[hit.item as usize].title,
            hit.score
        );
    }
    println!("hit count: {}", hits.len());
}
