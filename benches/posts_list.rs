use std::fs;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use redshift_site::indexer::sort_newest_first;
use redshift_site::parsers::{FrontMatterParser, YamlFrontMatter};
use redshift_site::{PostRecord, build_posts_list};
use tempfile::TempDir;

/// Generate synthetic records with a spread of dates
fn generate_records(count: usize) -> Vec<PostRecord> {
    (0..count)
        .map(|i| {
            let date = format!("20{:02}-{:02}-{:02}", 10 + i % 15, 1 + i % 12, 1 + i % 28);
            let filename = format!("{}-post-{}.md", date, i);
            PostRecord::new(&filename, date, format!("Post {}", i))
        })
        .collect()
}

fn post_content(i: usize) -> String {
    format!(
        "---\ndate: 2024-{:02}-{:02}\ntitle: \"Post number {}\"\ntags: [rust, blog]\n---\n\n# Heading {}\n\n{}",
        1 + i % 12,
        1 + i % 28,
        i,
        i,
        "Lorem ipsum dolor sit amet. ".repeat(40)
    )
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_newest_first");

    for size in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let records = generate_records(size);

            b.iter(|| {
                let mut cloned = black_box(records.clone());
                sort_newest_first(&mut cloned);
                cloned
            });
        });
    }

    group.finish();
}

fn bench_front_matter(c: &mut Criterion) {
    let content = post_content(7);

    c.bench_function("parse_front_matter", |b| {
        b.iter(|| {
            let document = YamlFrontMatter.parse(black_box(&content)).unwrap();
            document.text("title")
        });
    });
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_posts_list");
    group.sample_size(20);

    for size in [10, 100, 500].iter() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..*size {
            let name = format!("2024-{:02}-{:02}-post-{}.md", 1 + i % 12, 1 + i % 28, i);
            fs::write(temp_dir.path().join(name), post_content(i)).unwrap();
        }

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &temp_dir, |b, dir| {
            b.iter(|| build_posts_list(black_box(dir.path())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_front_matter, bench_build);
criterion_main!(benches);
