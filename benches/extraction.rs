use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use neo_extract::ingestion::{load_approaches_from_str, load_neos_from_reader};
use neo_extract::models::StandardFactory;

fn neo_csv(rows: usize) -> String {
    let mut out = String::from("id,pdes,name,pha,H,diameter,albedo\n");
    for i in 0..rows {
        let name = if i % 3 == 0 { "Named" } else { "" };
        let diameter = if i % 2 == 0 { "1.25" } else { "" };
        out.push_str(&format!("a{i:07},{i},{name},N,17.2,{diameter},0.2\n"));
    }
    out
}

fn cad_json(rows: usize) -> String {
    let data: Vec<serde_json::Value> = (0..rows)
        .map(|i| {
            serde_json::json!([
                i.to_string(),
                "12",
                "2415020.507669610",
                "1900-Jan-01 00:11",
                "0.0921795123769547",
                "0.0912006569517418",
                "16.7523040362574",
                "18.1"
            ])
        })
        .collect();
    serde_json::json!({
        "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "v_rel", "h"],
        "data": data,
    })
    .to_string()
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    for rows in [1_000usize, 10_000] {
        let csv_input = neo_csv(rows);
        group.bench_with_input(BenchmarkId::new("neos_csv", rows), &csv_input, |b, input| {
            b.iter(|| {
                let mut rdr = csv::ReaderBuilder::new()
                    .has_headers(true)
                    .from_reader(input.as_bytes());
                black_box(load_neos_from_reader(&mut rdr, &StandardFactory).unwrap())
            })
        });

        let json_input = cad_json(rows);
        group.bench_with_input(BenchmarkId::new("approaches_json", rows), &json_input, |b, input| {
            b.iter(|| black_box(load_approaches_from_str(input, &StandardFactory).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
