//! Benchmark Binary
//!
//! Walks the built-in game directories, times the three solvers on each
//! file, cross-checks their winner partitions, and writes results.json.

fn main() {
    pgsolve::init();
    pgsolve::harness::run().expect("benchmark run");
}
