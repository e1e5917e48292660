//! Snake on a 32x16 grid of 4x4 pixel blocks
//!
//! Steer with w/a/s/d, quit with q. The terminal is switched to raw mode for
//! the duration of the game.

mod common;

use std::{
    collections::VecDeque,
    thread,
    time::{Duration, Instant},
};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal,
};
use rand::Rng;
use ssd1306_i2c::FrameBuffer;

const GRID_WIDTH: i32 = 32;
const GRID_HEIGHT: i32 = 16;
const BLOCK_SIZE: u32 = 4;
const MAX_LENGTH: usize = 100;

#[derive(Parser, Debug)]
#[command(about = "Play snake on an SSD1306 panel")]
struct Cli {
    #[command(flatten)]
    bus: common::BusArgs,

    /// Milliseconds per game tick
    #[arg(long, default_value_t = 200)]
    tick_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    fn step(self, (x, y): (i32, i32)) -> (i32, i32) {
        match self {
            Self::Up => (x, y - 1),
            Self::Right => (x + 1, y),
            Self::Down => (x, y + 1),
            Self::Left => (x - 1, y),
        }
    }
}

struct Game {
    /// Head first
    body: VecDeque<(i32, i32)>,
    heading: Heading,
    food: (i32, i32),
}

impl Game {
    fn new(rng: &mut impl Rng) -> Self {
        let (cx, cy) = (GRID_WIDTH / 2, GRID_HEIGHT / 2);
        let mut game = Self {
            body: VecDeque::from([(cx, cy), (cx - 1, cy), (cx - 2, cy)]),
            heading: Heading::Right,
            food: (0, 0),
        };
        game.place_food(rng);
        game
    }

    fn place_food(&mut self, rng: &mut impl Rng) {
        loop {
            let food = (rng.gen_range(0..GRID_WIDTH), rng.gen_range(0..GRID_HEIGHT));
            if !self.body.contains(&food) {
                self.food = food;
                return;
            }
        }
    }

    /// Change heading unless it would reverse into the body
    fn steer(&mut self, heading: Heading) {
        if heading != self.heading.opposite() {
            self.heading = heading;
        }
    }

    /// Advance one tick; false once the snake hits a wall or itself
    fn tick(&mut self, rng: &mut impl Rng) -> bool {
        let Some(&head) = self.body.front() else {
            return false;
        };
        let next = self.heading.step(head);
        let (x, y) = next;
        if !(0..GRID_WIDTH).contains(&x)
            || !(0..GRID_HEIGHT).contains(&y)
            || self.body.contains(&next)
        {
            return false;
        }

        self.body.push_front(next);
        if next == self.food {
            if self.body.len() > MAX_LENGTH {
                self.body.pop_back();
            }
            self.place_food(rng);
        } else {
            self.body.pop_back();
        }
        true
    }

    fn render(&self, fb: &mut FrameBuffer) {
        fb.clear();
        for &(x, y) in self.body.iter().chain([&self.food]) {
            fb.fill_rect(
                x as u32 * BLOCK_SIZE,
                y as u32 * BLOCK_SIZE,
                BLOCK_SIZE,
                BLOCK_SIZE,
                true,
            );
        }
    }
}

/// Restores cooked mode on drop
struct RawMode;

impl RawMode {
    fn enable() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}

enum Input {
    Steer(Heading),
    Quit,
}

/// Take at most one pending key press without blocking
fn poll_input() -> std::io::Result<Option<Input>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    let Event::Key(KeyEvent {
        code: KeyCode::Char(c),
        kind: KeyEventKind::Press,
        ..
    }) = event::read()?
    else {
        return Ok(None);
    };
    Ok(match c {
        'w' => Some(Input::Steer(Heading::Up)),
        'd' => Some(Input::Steer(Heading::Right)),
        's' => Some(Input::Steer(Heading::Down)),
        'a' => Some(Input::Steer(Heading::Left)),
        'q' => Some(Input::Quit),
        _ => None,
    })
}

fn main() -> anyhow::Result<()> {
    common::init_logging();
    let cli = Cli::parse();

    let mut display = cli.bus.open()?;
    let mut rng = rand::thread_rng();
    let mut game = Game::new(&mut rng);
    let mut fb = FrameBuffer::new();
    let tick = Duration::from_millis(cli.tick_ms);

    {
        let _raw = RawMode::enable()?;
        loop {
            let started = Instant::now();
            match poll_input()? {
                Some(Input::Quit) => break,
                Some(Input::Steer(heading)) => game.steer(heading),
                None => {}
            }
            if !game.tick(&mut rng) {
                break;
            }
            game.render(&mut fb);
            fb.flush(&mut display);
            thread::sleep(tick.saturating_sub(started.elapsed()));
        }
    }
    log::info!("game over, length {}", game.body.len());

    fb.clear();
    display.clear();
    display.set_cursor(3, 10);
    display.draw_string("Game Over");
    thread::sleep(Duration::from_secs(5));
    fb.flush(&mut display);
    thread::sleep(Duration::from_secs(3));

    display.clear();
    ssd1306_i2c::close(display);
    Ok(())
}
