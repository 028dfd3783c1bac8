use crate::game::graph::Graph;
use crate::solver;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// one benchmarked game file: its shape, how long each solver took, and
/// whether the three winner partitions agreed. the reduction solver is
/// left out on games past the built-in size and priority thresholds,
/// where its round bound makes it impractical.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub set: String,
    pub name: String,
    pub vertices: usize,
    pub edges: usize,
    pub top_priority: usize,
    pub reduction_secs: Option<f64>,
    pub pruning_secs: f64,
    pub improvement_secs: f64,
    pub agree: bool,
}

/// walk every built-in game directory, benchmark each file, and write
/// the collected records out as json
pub fn run() -> anyhow::Result<Vec<Record>> {
    let mut records = Vec::new();
    for set in crate::GAME_SETS {
        records.extend(run_set(set)?);
    }
    let json = serde_json::to_string_pretty(&records).context("render records")?;
    std::fs::write(crate::RESULTS_PATH, json)
        .with_context(|| format!("write {}", crate::RESULTS_PATH))?;
    log::info!("{} tests completed", records.len());
    Ok(records)
}

fn run_set(set: &str) -> anyhow::Result<Vec<Record>> {
    let mut records = Vec::new();
    let Ok(entries) = std::fs::read_dir(set) else {
        log::warn!("{:<24} missing, skipping the set", set);
        return Ok(records);
    };
    let mut files = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();
    files.sort();
    files.truncate(crate::MAX_TESTS_PER_SET);
    log::info!("{:<24} {} files", set, files.len());
    let progress = crate::progress(files.len());
    for path in files {
        if let Some(record) = run_file(set, &path)? {
            records.push(record);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    Ok(records)
}

fn run_file(set: &str, path: &Path) -> anyhow::Result<Option<Record>> {
    let name = path
        .file_name()
        .context("directory entries have names")?
        .to_string_lossy()
        .into_owned();
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", name))?;
    let game = match text.parse::<Graph>() {
        Ok(game) => game,
        Err(reason) => {
            log::warn!("{:<24} rejected: {:#}", name, reason);
            return Ok(None);
        }
    };
    let oversized = game.n() > crate::REDUCTION_VERTEX_LIMIT
        || game.max_priority() > crate::REDUCTION_PRIORITY_LIMIT;
    let reduction = match oversized {
        true => None,
        false => {
            let copy = game.clone();
            Some(timed(move || solver::solve_a(copy)))
        }
    };
    let copy = game.clone();
    let pruning = timed(move || solver::solve_b(copy));
    let copy = game.clone();
    let improvement = timed(move || solver::solve_c(copy));
    let agree = pruning.1 == improvement.1
        && reduction.as_ref().map_or(true, |(_, w)| *w == pruning.1);
    if !agree {
        log::warn!("{:<24} solvers disagree", name);
    }
    let reduction_secs = reduction.map(|(secs, _)| secs);
    log::info!(
        "{:<24} A {} B {:>8.3}s C {:>8.3}s",
        name,
        match reduction_secs {
            Some(secs) => format!("{:>8.3}s", secs),
            None => format!("{:>9}", "not run"),
        },
        pruning.0,
        improvement.0,
    );
    Ok(Some(Record {
        set: set.to_string(),
        name,
        vertices: game.n(),
        edges: game.edges(),
        top_priority: game.max_priority(),
        reduction_secs,
        pruning_secs: pruning.0,
        improvement_secs: improvement.0,
        agree,
    }))
}

fn timed<T>(work: impl FnOnce() -> T) -> (f64, T) {
    let start = Instant::now();
    let result = work();
    (start.elapsed().as_secs_f64(), result)
}
