//! Dictionary-to-XSL-FO conversion benchmarks
//!
//! Measures the full conversion (parse, group, build, serialize) for dictionaries of
//! 10, 100 and 1000 entries, and markup resolution on its own.
//!
//! Run benchmarks: `cargo bench --bench conversion_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio::format::FormatResolver;
use folio::markup::Parser;
use folio::{Dictionary, DictionaryFormatBuilder, FormatConfig};
use serde_json::json;
use std::hint::black_box;

const LETTERS: &[char] = &['s', 'z', 't', 'd', 'k', 'a', 'e', 'i'];

/// Generate a dictionary with `count` marked-up entries
fn generate_dictionary(count: usize) -> Dictionary {
    let words: Vec<_> = (0..count)
        .map(|i| {
            let name = format!("{}{:04}", LETTERS[i % LETTERS.len()], i);
            json!({
                "name": name,
                "pronunciation": name,
                "parts": { "ja": { "sort": "名", "sections": [{
                    "equivalents": [{ "category": "名", "frame": "[x]を", "names": ["一", "/二/"] }],
                    "informations": [{ "kind": "meaning", "text": format!("{{{name}}} の意味") }],
                    "phrases": [{ "expression": format!("[{name}] a"), "equivalentNames": ["句"] }],
                    "examples": [{ "sentence": format!("[{name}] /b/."), "translation": "訳。" }]
                }] } }
            })
        })
        .collect();
    let source = json!({ "settings": { "version": "S" }, "words": words }).to_string();
    Dictionary::from_json_str(&source).expect("Failed to build benchmark dictionary")
}

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        let dictionary = generate_dictionary(count);

        group.bench_with_input(BenchmarkId::new("entries", count), &dictionary, |b, dictionary| {
            b.iter(|| {
                let mut builder = DictionaryFormatBuilder::new("ja");
                black_box(builder.convert(dictionary).expect("Failed to convert dictionary"))
            });
        });
    }

    group.finish();
}

fn benchmark_markup(c: &mut Criterion) {
    let parser = Parser::new(FormatResolver::new(&FormatConfig::default()));
    let source = "see {sal} and [a /b {c}/ d] or /e [f]/ with \\/escapes\\/";

    c.bench_function("markup_resolution", |b| {
        b.iter(|| black_box(parser.parse_text(black_box(source)).expect("Failed to parse markup")))
    });
}

criterion_group!(benches, benchmark_conversion, benchmark_markup);
criterion_main!(benches);
