use env_logger::Builder;
use log::{LevelFilter, Record};
use std::io;
use std::io::Write;

/// Maps the number of `-v` flags to a level; no flag defers to `RUST_LOG`.
pub fn level_for_verbosity(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// Log lines are written as `c LEVEL target - message` so they read as
/// comments in the trajectory format.
fn write_comment_line<W: Write>(buf: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "c {} {} - {}",
        record.level(),
        record.target(),
        record.args()
    )
}

pub fn build_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    builder.format(|buf, record| write_comment_line(buf, record));
    if let Some(level) = level {
        builder.filter(None, level);
    }
    builder.init();
}
