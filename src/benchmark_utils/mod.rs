use prettytable::{row, Table};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::codec::{Serializer, Shape};
use crate::store::DocumentStore;

#[derive(Serialize, Deserialize, Clone)]
pub struct BenchmarkResult {
    pub serializer_name: String,
    pub item_count: usize,
    pub payload_bytes: usize,
    pub total_time_secs: f64,
    pub avg_write_time_secs: f64,
    pub avg_read_time_secs: f64,
}

/// Runs the timed insert/get loop for one serializer.
///
/// Each iteration writes the test document under a fresh random key and reads
/// it straight back, timing the two operations separately.
pub fn run_benchmark<S: Serializer>(
    serializer: S,
    document: &serde_json::Value,
    item_count: usize,
) -> Result<BenchmarkResult, Box<dyn Error>> {
    let mut store = DocumentStore::new(serializer);
    let serializer_name = store.serializer().name().to_string();
    let payload_bytes = store.serializer().encode(document)?.len();
    let shape = Shape::<serde_json::Value>::value();

    let mut total_write_time = Duration::ZERO;
    let mut total_read_time = Duration::ZERO;

    let start_total = Instant::now();

    for _ in 0..item_count {
        let key = random_key();

        // === Write Benchmark ===
        let start_write = Instant::now();
        store.insert(&key, document)?;
        total_write_time += start_write.elapsed();

        // === Read Benchmark ===
        let start_read = Instant::now();
        let read_back = store.get(&key, &shape)?;
        total_read_time += start_read.elapsed();

        debug_assert_eq!(&read_back, document);
    }

    let total_time = start_total.elapsed();

    Ok(BenchmarkResult {
        serializer_name,
        item_count,
        payload_bytes,
        total_time_secs: total_time.as_secs_f64(),
        avg_write_time_secs: total_write_time.as_secs_f64() / item_count as f64,
        avg_read_time_secs: total_read_time.as_secs_f64() / item_count as f64,
    })
}

/// Random hex document key, standing in for a GUID.
fn random_key() -> String {
    format!("{:032x}", rand::random::<u128>())
}

pub fn read_benchmark_results(file_path: &str) -> Vec<BenchmarkResult> {
    if Path::new(file_path).exists() {
        let file_content = fs::read_to_string(file_path).expect("Failed to read file");
        serde_json::from_str::<Vec<BenchmarkResult>>(&file_content).unwrap_or_else(|_| {
            eprintln!("Error parsing results file '{}'. Starting fresh.", file_path);
            Vec::new()
        })
    } else {
        Vec::new()
    }
}

pub fn append_benchmark_result(result: &BenchmarkResult, file_path: &Path) {
    let mut results: Vec<BenchmarkResult> = if file_path.exists() {
        // Read existing results from the file if it exists
        let data = fs::read_to_string(file_path).expect("Failed to read file");
        serde_json::from_str(&data).expect("Failed to deserialize existing results")
    } else {
        // If the file doesn't exist, start with an empty vector
        Vec::new()
    };

    // Append the new result to the vector
    results.push(result.clone());

    // Serialize the vector and write it back to the file
    let json = serde_json::to_string_pretty(&results).expect("Failed to serialize results");
    fs::write(file_path, json).expect("Failed to write results to file");
}

/// Print benchmark results in a human-readable table.
pub fn print_benchmark_results(results: &[BenchmarkResult]) {
    let mut table = Table::new();
    table.add_row(row![
        "Serializer",
        "Items",
        "Payload (B)",
        "Total (s)",
        "Avg Write (us)",
        "Avg Read (us)"
    ]);

    for result in results {
        table.add_row(row![
            &result.serializer_name,
            format!("{}", result.item_count),
            format!("{}", result.payload_bytes),
            format!("{:.3}", result.total_time_secs),
            format!("{:.2}", result.avg_write_time_secs * 1_000_000.0),
            format!("{:.2}", result.avg_read_time_secs * 1_000_000.0),
        ]);
    }

    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::gzip::JsonGzipSerializer;

    fn sample_result(name: &str) -> BenchmarkResult {
        BenchmarkResult {
            serializer_name: name.to_string(),
            item_count: 10,
            payload_bytes: 128,
            total_time_secs: 0.5,
            avg_write_time_secs: 0.02,
            avg_read_time_secs: 0.03,
        }
    }

    #[test]
    fn appended_results_read_back_in_order() {
        let path = std::env::temp_dir().join(format!(
            "serializer-benchmark-results-{:016x}.json",
            rand::random::<u64>()
        ));

        append_benchmark_result(&sample_result("Json"), &path);
        append_benchmark_result(&sample_result("JsonGzip"), &path);

        let results = read_benchmark_results(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].serializer_name, "Json");
        assert_eq!(results[1].serializer_name, "JsonGzip");
        assert_eq!(results[1].payload_bytes, 128);
    }

    #[test]
    fn missing_results_file_reads_as_empty() {
        let results = read_benchmark_results("no-such-results-file.json");
        assert!(results.is_empty());
    }

    #[test]
    fn run_benchmark_reports_the_store_serializer() {
        let document = serde_json::json!({"id": 1, "name": "widget", "tags": null});
        let result = run_benchmark(JsonGzipSerializer::new(), &document, 4).unwrap();

        assert_eq!(result.serializer_name, "JsonGzip");
        assert_eq!(result.item_count, 4);
        assert!(result.payload_bytes > 0);
    }
}
