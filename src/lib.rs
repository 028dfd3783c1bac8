pub mod game;
pub mod generate;
pub mod harness;
pub mod solver;

/// dimensional analysis types
type Weight = i64;

// input caps for the benchmark workload
const MAX_VERTICES: usize = 1_000;
const MAX_PRIORITY: usize = 10;
const MAX_TESTS_PER_SET: usize = 15;

// the mean-payoff reduction is impractical past these sizes;
// the harness records it as not-run instead of waiting it out
const REDUCTION_VERTEX_LIMIT: usize = 300;
const REDUCTION_PRIORITY_LIMIT: usize = 3;

// where the harness looks for game files and the generator writes them
const GAME_SETS: [&str; 3] = ["games/keiren", "games/random", "games/bipartite"];
const RESULTS_PATH: &str = "results.json";

/// absorbing stand-in for ±infinity inside the lookahead values
const INFINITY: Weight = i64::MAX - 1;

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}

/// progress bar
pub fn progress(n: usize) -> indicatif::ProgressBar {
    let tick = std::time::Duration::from_secs(60);
    let style = "{spinner:.cyan} {elapsed} ~ {percent:>3}% {wide_bar:.cyan}";
    let style = indicatif::ProgressStyle::with_template(style).unwrap();
    let progress = indicatif::ProgressBar::new(n as u64);
    progress.set_style(style);
    progress.enable_steady_tick(tick);
    progress
}

/// initialize logging
pub fn init() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
