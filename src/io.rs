//! Text formats for graphs, attack sequences and trajectories.
//!
//! Graphs use the PACE/DIMACS layout: `c` lines are comments, a single
//! `p <tag> <n> <m>` header declares `n` vertices, and every other line is an
//! edge `u v` with 1-based vertex ids. Attack sequences use the same edge
//! lines without a header, one removal per line in removal order.

#[cfg(feature = "log")]
use crate::graph::BaseGraph;
use crate::graph::{Edge, HashMapGraph, MutableGraph};
use crate::trajectory::ConnectivityTrajectory;
#[cfg(feature = "log")]
use log::{debug, warn};
use std::convert::TryFrom;
use std::io;
use std::io::{BufRead, Write};

fn invalid_input(line_number: usize, msg: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("line {}: {}", line_number, msg),
    )
}

fn parse_numbers(line: &str, line_number: usize) -> io::Result<Vec<usize>> {
    line.split_whitespace()
        .map(|s| s.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid_input(line_number, &e.to_string()))
}

/// Parses a `p <tag> <n> <m>` line.
pub fn parse_header(line: &str, line_number: usize) -> io::Result<(usize, usize)> {
    let malformed = || invalid_input(line_number, "expected `p <tag> <n> <m>`");
    let rest = line.strip_prefix('p').ok_or_else(malformed)?;
    if !rest.starts_with(char::is_whitespace) {
        return Err(malformed());
    }
    let mut tokens = rest.split_whitespace();
    let tag = tokens.next().ok_or_else(malformed)?;
    if tag.parse::<usize>().is_ok() {
        return Err(malformed());
    }
    let nums = parse_numbers(&tokens.collect::<Vec<_>>().join(" "), line_number)?;
    match nums.as_slice() {
        [n, m] => Ok((*n, *m)),
        _ => Err(malformed()),
    }
}

/// Parses a `u v` line with 1-based ids into a 0-based edge.
pub fn parse_edge(line: &str, line_number: usize) -> io::Result<Edge> {
    let nums = parse_numbers(line, line_number)?;
    match nums.as_slice() {
        [u, v] if *u > 0 && *v > 0 => Ok((u - 1, v - 1)),
        [_, _] => Err(invalid_input(line_number, "vertex ids start at 1")),
        _ => Err(invalid_input(line_number, "expected two vertex ids")),
    }
}

fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('c')
}

pub struct PaceReader<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<PaceReader<T>> for HashMapGraph {
    type Error = io::Error;

    fn try_from(reader: PaceReader<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;
        let mut graph: Option<HashMapGraph> = None;
        let mut order = 0;
        let mut declared_size = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;
            if is_skipped(&line) {
                continue;
            }
            let line = line.trim();
            if line.starts_with('p') {
                if graph.is_some() {
                    return Err(invalid_input(line_number, "duplicate p-line"));
                }
                let (n, m) = parse_header(line, line_number)?;
                order = n;
                declared_size = m;
                graph = Some(HashMapGraph::with_vertices(n));
                continue;
            }
            let graph = graph
                .as_mut()
                .ok_or_else(|| invalid_input(line_number, "edge before p-line"))?;
            let (u, v) = parse_edge(line, line_number)?;
            if u >= order || v >= order {
                return Err(invalid_input(line_number, "vertex id exceeds p-line"));
            }
            if u == v {
                #[cfg(feature = "log")]
                debug!("skipping self loop on line {}", line_number);
                continue;
            }
            graph.add_edge(u, v);
        }
        let graph = graph.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "missing p-line")
        })?;
        #[cfg(feature = "log")]
        if graph.size() != declared_size {
            warn!(
                "p-line declares {} edges, read {} distinct edges",
                declared_size,
                graph.size()
            );
        }
        #[cfg(not(feature = "log"))]
        let _ = declared_size;
        Ok(graph)
    }
}

pub struct SequenceReader<T: BufRead>(pub T);

impl<T: BufRead> SequenceReader<T> {
    pub fn read_sequence(self) -> io::Result<Vec<Edge>> {
        let mut sequence = Vec::new();
        for (idx, line) in self.0.lines().enumerate() {
            let line = line?;
            if is_skipped(&line) {
                continue;
            }
            sequence.push(parse_edge(line.trim(), idx + 1)?);
        }
        Ok(sequence)
    }
}

/// Writes one `s <step> <ratio>` line per trajectory entry, preceded by
/// `c` comment lines.
pub struct TrajectoryWriter<'a, T: Write> {
    trajectory: &'a ConnectivityTrajectory,
    comments: Vec<String>,
    writer: T,
}

impl<'a, T: Write> TrajectoryWriter<'a, T> {
    pub fn new(trajectory: &'a ConnectivityTrajectory, writer: T) -> Self {
        Self {
            trajectory,
            comments: Vec::new(),
            writer,
        }
    }

    pub fn comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comments.push(comment.into());
        self
    }

    pub fn output(mut self) -> io::Result<()> {
        for comment in self.comments.iter() {
            for line in comment.lines() {
                writeln!(self.writer, "c {}", line)?;
            }
        }
        for (step, ratio) in self.trajectory.iter().enumerate() {
            writeln!(self.writer, "s {} {}", step, ratio)?;
        }
        self.writer.flush()
    }
}
