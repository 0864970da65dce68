use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod chrome;
mod constants;
mod deck;
mod input;
mod render;
mod state;

use crate::chrome::{chrome_layout, draw_chrome, hit_test};
use crate::constants::*;
use crate::deck::Deck;
use crate::input::{NavCommand, SwipeTracker, keyboard_command};
use crate::render::{Viewport, draw_slide};
use crate::state::Navigator;

#[derive(Parser, Debug)]
#[command(name = "slidedeck", about = "Present a slide deck in a raylib window")]
struct Args {
    /// Deck file (JSON array of slides). The built-in deck is shown when omitted.
    deck: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // --- Load Deck ---
    let deck = match &args.deck {
        Some(path) => Deck::load(path)?,
        None => Deck::builtin(),
    };
    let source = args
        .deck
        .as_deref()
        .map_or_else(|| "built-in".to_string(), |path| path.display().to_string());
    info!("deck ready: {} slides ({})", deck.slide_count(), source);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Slidedeck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut navigator = Navigator::new(deck.slide_count());
    let mut swipe = SwipeTracker::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let viewport = Viewport {
            width: rl.get_screen_width(),
            height: rl.get_screen_height(),
        };
        let layout = chrome_layout(deck.slide_count(), viewport);

        // --- Gather Input ---
        // Each adapter yields at most one command per frame; all of them feed
        // the same navigator.
        let mut commands: Vec<NavCommand> = Vec::new();
        if let Some(command) = keyboard_command(&rl) {
            commands.push(command);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = rl.get_mouse_position();
            match hit_test(&layout, point) {
                Some(command) => commands.push(command),
                // A press outside the chrome may still become a swipe.
                None => swipe.begin(point.x),
            }
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(command) = swipe.finish(rl.get_mouse_position().x) {
                commands.push(command);
            }
        }
        for command in commands {
            navigator.apply(command);
        }

        // --- Draw Frame ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        draw_slide(&mut d, deck.slide(navigator.current()), viewport);
        draw_chrome(&mut d, navigator.current(), deck.slide_count(), &layout, viewport);
    }

    Ok(())
}
