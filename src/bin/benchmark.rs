use serializer_benchmark_rs::benchmark_utils::{
    append_benchmark_result, print_benchmark_results, read_benchmark_results, run_benchmark,
};
use serializer_benchmark_rs::codec::gzip::JsonGzipSerializer;
use serializer_benchmark_rs::codec::json::JsonSerializer;
use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_DOCUMENT: &str = "data/test-document.json";
const ITEM_COUNT: usize = 1000;

fn main() {
    // Get the command-line arguments
    let args: Vec<String> = env::args().collect();

    let document_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_DOCUMENT);
    let results_path = args.get(2).map(String::as_str);

    // Check if the path is a valid file
    if !Path::new(document_path).is_file() {
        eprintln!("Usage: {} [document.json] [results.json]", args[0]);
        eprintln!(
            "  [document.json] - Test document to write and read back (default: {})",
            DEFAULT_DOCUMENT
        );
        eprintln!("  [results.json]  - Optional file to append results to");
        eprintln!("Error: {} is not a valid file.", document_path);
        std::process::exit(1);
    }

    let content = fs::read_to_string(document_path).expect("Failed to read test document");
    let document: serde_json::Value =
        serde_json::from_str(&content).expect("Test document is not valid JSON");

    let mut results = Vec::new();

    // Baseline first, then the compressing serializer
    results.push(
        run_benchmark(JsonSerializer::new(), &document, ITEM_COUNT)
            .expect("Baseline benchmark failed"),
    );
    results.push(
        run_benchmark(JsonGzipSerializer::new(), &document, ITEM_COUNT)
            .expect("GZip benchmark failed"),
    );

    if let Some(path) = results_path {
        for result in &results {
            append_benchmark_result(result, Path::new(path));
        }

        // Report the whole collected history, not just this run
        results = read_benchmark_results(path);
    }

    print_benchmark_results(&results);
}
