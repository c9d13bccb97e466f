pub mod benchmark_utils;
pub mod codec;
pub mod store;
