//! Command line handling shared by the demos

use std::path::PathBuf;

use anyhow::Context;
use ssd1306_i2c::linux::{self, LinuxDisplay};

/// Bus selection flags
#[derive(clap::Args, Debug)]
pub struct BusArgs {
    /// I2C character device the panel is attached to
    #[arg(long, default_value = "/dev/i2c-1")]
    pub bus: PathBuf,

    /// 7-bit slave address, decimal or 0x-prefixed hex
    #[arg(long, default_value = "0x3C", value_parser = parse_address)]
    pub address: u8,
}

impl BusArgs {
    /// Open and initialize the panel
    pub fn open(&self) -> anyhow::Result<LinuxDisplay> {
        linux::open(&self.bus, self.address).with_context(|| {
            format!(
                "opening SSD1306 at {:#04x} on {}",
                self.address,
                self.bus.display()
            )
        })
    }
}

/// Route driver log lines to stderr, `info` unless `RUST_LOG` says otherwise
pub fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn parse_address(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address {s:?}: {e}"))
}
