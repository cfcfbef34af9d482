// benches/scores.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lawlers_law::scrape::game;

/// Synthetic play-by-play page: interleaved event cells and running-score
/// cells, with the occasional repeated score, roughly the shape of a real
/// four-quarter game.
fn sample_doc() -> String {
    let mut doc = String::from(
        "<html><head><meta content=\"CHI vs LAL, January 5, 2022\"></head><body><table>",
    );
    let mut away = 0u32;
    let mut home = 0u32;
    for i in 0..400 {
        doc.push_str("<td class=\"left\">Jump shot</td>");
        doc.push_str("<td class=\"center\">+2</td>");
        if i % 2 == 0 {
            away += 2;
        } else {
            home += 3;
        }
        doc.push_str(&format!("<td class=\"center\">{away}-{home}</td>"));
        if i % 7 == 0 {
            // Repeated score cell, as the site emits for timeouts.
            doc.push_str(&format!("<td class=\"center\">{away}-{home}</td>"));
        }
    }
    doc.push_str("</table></body></html>");
    doc
}

fn bench_scores(c: &mut Criterion) {
    let doc = sample_doc();

    c.bench_function("score_list", |b| {
        b.iter(|| {
            let scores = game::score_list(black_box(&doc));
            black_box(scores.len())
        })
    });

    c.bench_function("away_team", |b| {
        b.iter(|| black_box(game::away_team(black_box(&doc), "LAL")))
    });
}

criterion_group!(benches, bench_scores);
criterion_main!(benches);
