//! Print "Hello World" in the top-left corner for five seconds

mod common;

use std::{thread, time::Duration};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Show a greeting on an SSD1306 panel")]
struct Cli {
    #[command(flatten)]
    bus: common::BusArgs,

    /// Text to show
    #[arg(long, default_value = "Hello World")]
    text: String,

    /// Seconds to keep the text up
    #[arg(long, default_value_t = 5)]
    seconds: u64,
}

fn main() -> anyhow::Result<()> {
    common::init_logging();
    let cli = Cli::parse();

    let mut display = cli.bus.open()?;
    display.clear();
    display.set_cursor(0, 0);
    display.draw_string(&cli.text);

    thread::sleep(Duration::from_secs(cli.seconds));

    display.clear();
    ssd1306_i2c::close(display);
    Ok(())
}
