use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kestrel::{FieldInfo, FieldType, Index, IndexConfig, SearchQuery};
use tempfile::TempDir;

fn build_index(dir: &TempDir, docs: usize) -> Index {
    let index = Index::create("bench", dir.path(), IndexConfig::default()).unwrap();
    index
        .add_field(FieldInfo::new("pk", FieldType::PrimaryKey))
        .unwrap();
    index
        .add_field(FieldInfo::new("body", FieldType::Text))
        .unwrap();

    for i in 0..docs {
        let mut content = HashMap::new();
        content.insert("pk".to_string(), format!("doc{i}"));
        content.insert(
            "body".to_string(),
            format!("quick brown fox number {} jumps over the lazy dog", i % 100),
        );
        index.update_document(&content).unwrap();
        if i % 1000 == 999 {
            index.sync_memory_segment().unwrap();
        }
    }
    index
}

fn bench_search(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let index = build_index(&dir, 10_000);

    c.bench_function("single_term_search", |b| {
        let queries = vec![SearchQuery::new("body", "fox")];
        b.iter(|| {
            let acc = index.search_docids(black_box(&queries), &[]).unwrap();
            black_box(acc.len())
        })
    });

    c.bench_function("conjunctive_search", |b| {
        let queries = vec![
            SearchQuery::new("body", "fox"),
            SearchQuery::new("body", "42"),
        ];
        b.iter(|| {
            let acc = index.search_docids(black_box(&queries), &[]);
            black_box(acc.map(|a| a.len()))
        })
    });

    c.bench_function("get_document", |b| {
        b.iter(|| black_box(index.get_document(black_box(5000))))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
