// benches/parse_table.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use nbb_scrape::core::html::first_table;
use nbb_scrape::specs::scores;

fn load_sample() -> String {
    // Repeat the fixture's game rows to get a season-sized page.
    let page = include_str!("../tests/fixtures/nbb_scores.html");
    let (head, rest) = page.split_once("<tbody>").unwrap_or((page, ""));
    let (body, tail) = rest.split_once("</tbody>").unwrap_or((rest, ""));
    let mut out = String::from(head);
    out.push_str("<tbody>");
    for _ in 0..80 {
        out.push_str(body);
    }
    out.push_str("</tbody>");
    out.push_str(tail);
    out
}

fn bench_scores(c: &mut Criterion) {
    let doc = load_sample();

    c.bench_function("first_table", |b| {
        b.iter(|| {
            let t = first_table(black_box(&doc));
            black_box(t.map(|t| t.len()))
        })
    });

    let raw = first_table(&doc).expect("fixture has a table");
    c.bench_function("scores_derive", |b| {
        b.iter(|| {
            let t = scores::derive(black_box(&raw), "2023-24", false);
            black_box(t.map(|t| t.len()).ok())
        })
    });
}

criterion_group!(benches, bench_scores);
criterion_main!(benches);
