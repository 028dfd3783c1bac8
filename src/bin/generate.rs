//! Generator Binary
//!
//! Writes the random and bipartite-symmetric test corpora into the
//! built-in game directories.

fn main() {
    pgsolve::init();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    pgsolve::generate::write_all(seed).expect("write test corpora");
}
