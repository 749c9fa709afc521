//! Gap Glider entry point
//!
//! Maps terminal keys onto simulation commands and runs the frame loop:
//! poll input, tick, draw the snapshot, then block until the next frame
//! slot. Pacing is best-effort; gameplay values are tuned for 60 FPS.

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    execute, terminal,
};

use gap_glider::consts::TICK_RATE;
use gap_glider::highscores::HighScores;
use gap_glider::sim::{GamePhase, GameState, TickInput, tick};
use gap_glider::tuning::Tuning;
use gap_glider::ui::TerminalRenderer;

/// Seed override for reproducible sessions
const SEED_ENV: &str = "GAP_GLIDER_SEED";

fn session_seed() -> u64 {
    match std::env::var(SEED_ENV) {
        Ok(v) => v.parse().unwrap_or_else(|_| {
            log::warn!("ignoring unparsable {SEED_ENV}={v}");
            rand::random()
        }),
        Err(_) => rand::random(),
    }
}

fn restore_terminal(out: &mut io::Stdout) -> io::Result<()> {
    execute!(out, terminal::LeaveAlternateScreen, cursor::Show)?;
    terminal::disable_raw_mode()
}

/// Side effects that ride on phase transitions: logging and leaderboard
/// bookkeeping. The simulation itself stays silent.
fn on_phase_change(state: &GameState, from: GamePhase, scores: &mut HighScores) {
    match state.phase {
        GamePhase::Running if from == GamePhase::NotStarted => {
            log::info!("run started");
        }
        GamePhase::Running => {
            log::info!("restarted, seed={}", state.seed);
        }
        GamePhase::Over => {
            log::info!(
                "run over: score={} best={} ticks={}",
                state.score,
                state.high_score,
                state.clock.now()
            );
            if let Some(rank) = scores.add_score(state.score, state.clock.now()) {
                log::info!("run entered the leaderboard at rank {rank}");
            }
        }
        GamePhase::NotStarted => {}
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let tuning = Tuning::load();
    let seed = session_seed();
    log::info!("starting session, seed={seed}");

    let mut state = GameState::new(seed, tuning);
    let mut scores = HighScores::new();
    let mut last_phase = state.phase;

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let (cols, rows) = terminal::size()?;
    let mut renderer = TerminalRenderer::new(cols, rows);

    let frame_dur = Duration::from_micros(1_000_000 / TICK_RATE as u64);

    loop {
        let frame_start = Instant::now();

        let mut input = TickInput::default();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return restore_terminal(&mut out);
                    }
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return restore_terminal(&mut out),
                        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => match state.phase {
                            GamePhase::NotStarted => input.start = true,
                            GamePhase::Running => input.flap = true,
                            GamePhase::Over => input.restart = true,
                        },
                        _ => {}
                    }
                }
                Event::Resize(c, r) => renderer.resize(c, r),
                _ => {}
            }
        }

        tick(&mut state, &input);

        if state.phase != last_phase {
            on_phase_change(&state, last_phase, &mut scores);
            last_phase = state.phase;
        }

        renderer.draw(&mut out, &state.snapshot(), &scores)?;

        // Blocking rate limiter; oversleep just slows the game down
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}
