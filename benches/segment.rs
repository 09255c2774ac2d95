use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use linkview::link::detect::UrlDetector;
use linkview::link::segment::segment_text;
use linkview::ui::layout::TextLayout;

fn make_transcript(n: usize) -> Vec<String> {
    let mut messages = Vec::with_capacity(n);
    for i in 0..n {
        messages.push(match i % 3 {
            0 => format!(
                "run {i} finished, notes at https://ci.example.com/runs/{i} and logs at \
https://logs.example.com/{i}/full"
            ),
            1 => "no links in this one, just a fairly ordinary sentence that still has to be \
scanned and wrapped like everything else"
                .to_string(),
            _ => format!("short https://example.com/{i}"),
        });
    }
    messages
}

fn bench_pipeline(c: &mut Criterion) {
    let detector = UrlDetector::new();

    for &n in &[64usize, 512] {
        let messages = make_transcript(n);

        let mut group = c.benchmark_group(format!("pipeline_msgs{n}"));
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(BenchmarkId::new("detect_segment", 80), |b| {
            b.iter(|| {
                for message in &messages {
                    let matches = detector.detect(message);
                    let segments = segment_text(message, &matches);
                    black_box(segments.len());
                }
            })
        });

        group.bench_function(BenchmarkId::new("layout", 80), |b| {
            b.iter(|| {
                for message in &messages {
                    black_box(TextLayout::new(message, 80).line_count());
                }
            })
        });

        group.bench_function(BenchmarkId::new("full_frame", 80), |b| {
            b.iter(|| {
                for message in &messages {
                    let matches = detector.detect(message);
                    let layout = TextLayout::new(message, 80);
                    for range in layout.ranges() {
                        black_box(
                            linkview::link::segment::segment_window(message, &matches, range)
                                .len(),
                        );
                    }
                }
            })
        });

        group.finish();
    }
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
