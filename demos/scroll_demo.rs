//! Scroll a line of text left using the controller's hardware scroll

mod common;

use std::{thread, time::Duration};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Hardware horizontal scroll on an SSD1306 panel")]
struct Cli {
    #[command(flatten)]
    bus: common::BusArgs,

    /// Text drawn on page 0 before scrolling
    #[arg(long, default_value = "KL RAHUL ROCKS!")]
    text: String,

    /// Scroll right instead of left
    #[arg(long)]
    right: bool,

    /// Frame interval code, 0 (5 frames) to 7 (2 frames)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=7))]
    speed: u8,

    /// Seconds to scroll for
    #[arg(long, default_value_t = 10)]
    seconds: u64,
}

fn main() -> anyhow::Result<()> {
    common::init_logging();
    let cli = Cli::parse();

    let mut display = cli.bus.open()?;
    display.clear();
    display.set_cursor(0, 0);
    display.draw_string(&cli.text);

    thread::sleep(Duration::from_secs(2));

    if cli.right {
        display.start_scroll_right(0, 0, cli.speed);
    } else {
        display.start_scroll_left(0, 0, cli.speed);
    }
    thread::sleep(Duration::from_secs(cli.seconds));
    display.stop_scroll();

    thread::sleep(Duration::from_secs(2));
    display.clear();
    ssd1306_i2c::close(display);
    Ok(())
}
