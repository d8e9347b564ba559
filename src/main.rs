use netrobust::comparison::{is_distinct_strategy, strategy_difference, DEFAULT_PREFIX};
use netrobust::graph::{BaseGraph, Edge, HashMapGraph};
use netrobust::io::{PaceReader, SequenceReader, TrajectoryWriter};
use netrobust::validation::{
    degree_products, high_degree_hits, is_sorted_by_degree_product, DegreeProductSummary,
};
use netrobust::{
    validate_attack_sequence, ComponentStrategy, ConnectivitySimulator, ConnectivityTrajectory,
    NetworkInfo, Outcome, SequenceLength, StrategyComparison,
};
use std::convert::TryFrom;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io;
use std::io::{stdout, BufReader, Write};
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "netrobust-cli",
    about = "Measures how an edge attack sequence fragments a network."
)]
struct Opt {
    /// Input graph, using the graph format of the PACE challenge.
    #[structopt(parse(from_os_str))]
    graph: PathBuf,

    /// Attack sequence, one `u v` edge per line with 1-based vertex ids.
    #[structopt(parse(from_os_str))]
    sequence: PathBuf,

    /// Output file. `stdout` if not specified.
    #[structopt(parse(from_os_str))]
    output: Option<PathBuf>,

    /// Second attack sequence compared against the first one.
    #[structopt(short, long, parse(from_os_str))]
    compare: Option<PathBuf>,

    /// Connectivity fraction used for the comparison.
    #[structopt(short, long, default_value = "0.5")]
    threshold: f64,

    /// Accept sequences that do not remove every edge.
    #[structopt(short, long)]
    partial: bool,

    /// Track components with a reverse union-find instead of recomputing them.
    #[structopt(short, long)]
    reverse_union_find: bool,

    /// Abort the simulation after this many seconds.
    #[structopt(long)]
    timeout: Option<u64>,

    /// Log verbosity, repeat for more detail. Needs the `logging` feature.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn read_sequence(path: &Path) -> io::Result<Vec<Edge>> {
    SequenceReader(BufReader::new(File::open(path)?)).read_sequence()
}

fn describe_sequence(graph: &HashMapGraph, sequence: &[Edge]) -> String {
    let products = degree_products(graph, sequence);
    let mut lines = vec![format!(
        "sorted by degree product: {}",
        is_sorted_by_degree_product(graph, sequence)
    )];
    if let Some(summary) = DegreeProductSummary::of(&products) {
        lines.push(format!(
            "degree product highest: {}, lowest: {}, average: {:.2}",
            summary.highest, summary.lowest, summary.average
        ));
    }
    lines.push(format!(
        "high-degree edges in top {}: {}",
        DEFAULT_PREFIX,
        high_degree_hits(graph, sequence, DEFAULT_PREFIX, 0.7)
    ));
    lines.join("\n")
}

fn describe_comparison(
    comparison: &StrategyComparison,
    baseline: &[Edge],
    candidate: &[Edge],
) -> String {
    let verdict = match comparison.outcome() {
        Outcome::Better(steps) => format!("candidate is {} steps better", steps),
        Outcome::Equal => "candidate is equal".to_string(),
        Outcome::Worse(steps) => format!("WARNING: candidate is {} steps worse", steps),
    };
    [
        format!(
            "baseline reaches {} connectivity at: {} edge removals",
            comparison.threshold, comparison.baseline_index
        ),
        format!(
            "candidate reaches {} connectivity at: {} edge removals",
            comparison.threshold, comparison.candidate_index
        ),
        verdict,
        format!(
            "candidate differs from baseline: {} ({}/{} different)",
            is_distinct_strategy(baseline, candidate),
            strategy_difference(baseline, candidate, DEFAULT_PREFIX),
            DEFAULT_PREFIX
        ),
    ]
    .join("\n")
}

fn write_trajectory<W: Write>(
    trajectory: &ConnectivityTrajectory,
    comments: Vec<String>,
    writer: W,
) -> io::Result<()> {
    comments
        .into_iter()
        .fold(TrajectoryWriter::new(trajectory, writer), |w, c| {
            w.comment(c)
        })
        .output()
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    #[cfg(feature = "logging")]
    netrobust::log::build_logger(netrobust::log::level_for_verbosity(opt.verbose));
    #[cfg(feature = "handle-ctrlc")]
    netrobust::signals::initialize()?;
    if let Some(seconds) = opt.timeout {
        netrobust::timeout::initialize_timeout(seconds)?;
    }

    let graph = HashMapGraph::try_from(PaceReader(BufReader::new(File::open(&opt.graph)?)))?;
    let sequence = read_sequence(&opt.sequence)?;
    let expectation = if opt.partial {
        SequenceLength::Partial
    } else {
        SequenceLength::Full
    };
    validate_attack_sequence(&graph, &sequence, expectation)?;

    let strategy = if opt.reverse_union_find {
        ComponentStrategy::ReverseUnionFind
    } else {
        ComponentStrategy::Recompute
    };
    let simulator = ConnectivitySimulator::default().strategy(strategy);
    let mut attacked = graph.clone();
    let trajectory = simulator.simulate_in_place(&mut attacked, &sequence)?;
    let info = NetworkInfo::of(&graph);

    let mut comments = vec![
        format!(
            "network: {} nodes, {} edges",
            graph.order(),
            graph.size()
        ),
        info.to_string(),
        format!(
            "change after attack:\n{}",
            info.change_to(&NetworkInfo::of(&attacked))
        ),
        describe_sequence(&graph, &sequence),
        format!(
            "drops below {} at: {} edge removals",
            opt.threshold,
            trajectory.first_drop_below(opt.threshold)
        ),
    ];

    if let Some(path) = opt.compare.as_ref() {
        let candidate = read_sequence(path)?;
        validate_attack_sequence(&graph, &candidate, expectation)?;
        let candidate_trajectory = simulator.simulate(&graph, &candidate)?;
        let comparison = StrategyComparison::new(&trajectory, &candidate_trajectory, opt.threshold);
        comments.push(describe_comparison(&comparison, &sequence, &candidate));
    }

    match opt.output {
        Some(path) => {
            let writer = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            write_trajectory(&trajectory, comments, writer)?
        }
        None => {
            let writer = stdout();
            write_trajectory(&trajectory, comments, writer.lock())?
        }
    }
    Ok(())
}
