//! Per-core CPU load meter
//!
//! Each core gets one page: a `C0: 42%` label at column 0 and a bar from
//! column 40 that is 80 columns wide at 100%.

mod common;

use std::{fmt::Write as _, fs, thread, time::Duration};

use anyhow::Context;
use clap::Parser;

/// One core per page
const MAX_CORES: usize = 8;

const BAR_COLUMN: u8 = 40;
const BAR_MAX: u8 = 80;

#[derive(Parser, Debug)]
#[command(about = "Show per-core CPU usage on an SSD1306 panel")]
struct Cli {
    #[command(flatten)]
    bus: common::BusArgs,

    /// Stop after this many updates (runs forever if omitted)
    #[arg(long)]
    samples: Option<u64>,

    /// Milliseconds between updates
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
}

/// Jiffy counters of one core
#[derive(Clone, Copy, Debug, Default)]
struct CpuStat {
    total: u64,
    idle: u64,
}

impl CpuStat {
    /// Parse a `cpuN user nice system idle iowait irq softirq steal ...` line
    ///
    /// Guest columns are already counted in user/nice and are ignored.
    fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let label = fields.next()?;
        let index = label.strip_prefix("cpu")?;
        if !index.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let mut counters = [0u64; 8];
        for (slot, field) in counters.iter_mut().zip(fields) {
            *slot = field.parse().ok()?;
        }
        let [_user, _nice, _system, idle, iowait, ..] = counters;
        Some(Self {
            total: counters.iter().sum(),
            idle: idle + iowait,
        })
    }

    /// Busy percentage between `prev` and `self`
    fn usage_since(self, prev: Self) -> u64 {
        let total = self.total.saturating_sub(prev.total);
        if total == 0 {
            return 0;
        }
        let idle = self.idle.saturating_sub(prev.idle);
        (total.saturating_sub(idle) * 100) / total
    }
}

fn read_stats() -> anyhow::Result<Vec<CpuStat>> {
    let text = fs::read_to_string("/proc/stat").context("reading /proc/stat")?;
    Ok(text
        .lines()
        .filter_map(CpuStat::parse)
        .take(MAX_CORES)
        .collect())
}

fn main() -> anyhow::Result<()> {
    common::init_logging();
    let cli = Cli::parse();

    let mut display = cli.bus.open()?;

    let mut prev = read_stats()?;
    if prev.is_empty() {
        log::error!("no CPU cores found in /proc/stat");
        ssd1306_i2c::close(display);
        anyhow::bail!("no CPU cores found");
    }
    log::info!("monitoring {} cores", prev.len());
    display.clear();

    let mut remaining = cli.samples;
    while remaining != Some(0) {
        thread::sleep(Duration::from_millis(cli.interval_ms));
        let curr = read_stats()?;

        for (page, (now, before)) in (0u8..).zip(curr.iter().zip(&prev)) {
            let usage = now.usage_since(*before).min(100);
            display.set_cursor(page, 0);
            write!(display, "C{page}:{usage:3}%")?;

            let bar = (usage * u64::from(BAR_MAX) / 100) as u8;
            display.draw_bar(page, BAR_COLUMN, bar);
            display.write_data(&[0u8; BAR_MAX as usize][..usize::from(BAR_MAX - bar)]);
        }

        prev = curr;
        remaining = remaining.map(|n| n - 1);
    }

    display.clear();
    ssd1306_i2c::close(display);
    Ok(())
}
