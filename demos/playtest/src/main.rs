//! playtest — headless run of the snackademy stealth core.
//!
//! A scripted player ferries snacks from the station to the desk and freezes
//! with a snack in hand whenever the librarian turns around.  The attention
//! ticker runs on its own thread; every session event is logged.  Set
//! `RUST_LOG=debug` to see each transition and station edge.

mod config;

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossbeam_channel::Receiver;
use sn_attention::AttentionState;
use sn_core::{Clock, GameConfig, MonotonicClock, Point, Rect, Size};
use sn_interaction::{CaughtReason, Direction, InteractionOutcome};
use sn_session::{AttentionTicker, ChannelObserver, Session, SessionBuilder, SessionEvent};
use sn_spatial::polygon_intersects_rect;
use tracing::{debug, info};

/// Headless playtest: a scripted player against the librarian.
#[derive(Parser, Debug)]
#[command(name = "playtest")]
#[command(about = "Run a scripted player against the librarian and report the score")]
struct Args {
    /// TOML game configuration (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock length of the run in seconds
    #[arg(long, default_value_t = 30)]
    seconds: u64,

    /// Delay between movement events in milliseconds
    #[arg(long, default_value_t = 40)]
    move_ms: u64,

    /// Keep walking with a snack while the librarian watches
    #[arg(long)]
    reckless: bool,
}

// ── Score keeping ─────────────────────────────────────────────────────────────

#[derive(Default, Debug)]
struct Tally {
    delivered:         u32,
    best_run:          u32,
    attention_catches: u32,
    collision_catches: u32,
    transitions:       u32,
}

impl Tally {
    fn record(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::AttentionChanged { at, state } => {
                self.transitions += 1;
                info!(%at, %state, "librarian");
            }
            SessionEvent::Outcome { outcome, delivered } => match outcome {
                InteractionOutcome::PickedUpSnack => info!("picked up a snack"),
                InteractionOutcome::DeliveredSnack => {
                    self.delivered += 1;
                    self.best_run = self.best_run.max(delivered);
                    info!(delivered, "delivered a snack");
                }
                InteractionOutcome::Caught(reason) => {
                    match reason {
                        CaughtReason::AttentionCaught => self.attention_catches += 1,
                        CaughtReason::CollisionCaught => self.collision_catches += 1,
                    }
                    info!(delivered, "{}", reason.message());
                }
                InteractionOutcome::None => {}
            },
            SessionEvent::Reset => info!("back to the snack station"),
        }
    }
}

fn drain(events: &Receiver<SessionEvent>, tally: &mut Tally) {
    for event in events.try_iter() {
        tally.record(event);
    }
}

// ── Scripted player ───────────────────────────────────────────────────────────

/// Position that puts a `size` sprite in the middle of `target`.
fn centred_in(target: Rect, size: Size) -> Point {
    Point::new(
        target.x + (target.width - size.width) / 2,
        target.y + (target.height - size.height) / 2,
    )
}

/// Next step toward the station (empty-handed) or the desk (carrying) that
/// does not touch a bookshelf.  `None` when boxed in.
fn plan_step<C: Clock>(session: &Session<C>) -> Option<Direction> {
    let player = session.player();
    let room = session.room();
    let target = if player.is_carrying_snack() { room.desk } else { room.snack_station };

    let here = player.position();
    let goal = centred_in(target, player.size());
    let (dx, dy) = (goal.x - here.x, goal.y - here.y);

    let horizontal = if dx < 0 { Direction::Left } else { Direction::Right };
    let vertical = if dy < 0 { Direction::Up } else { Direction::Down };
    let (first, second) = if dx.abs() >= dy.abs() {
        (horizontal, vertical)
    } else {
        (vertical, horizontal)
    };
    // Sidestep around a shelf corner when both useful directions are blocked.
    let sidesteps = match second {
        Direction::Up | Direction::Down => [Direction::Up, Direction::Down],
        Direction::Left | Direction::Right => [Direction::Left, Direction::Right],
    };

    let shelves = session.debug_hitboxes().obstacles;
    let step_px = session.config().step_px;
    [first, second, sidesteps[0], sidesteps[1]]
        .into_iter()
        .find(|&direction| {
            let mut probe = player.clone();
            probe.step(direction, step_px);
            let body = probe.hitbox();
            !shelves.iter().any(|shelf| polygon_intersects_rect(shelf, &body))
        })
}

fn watched(state: AttentionState) -> bool {
    state != AttentionState::Inattentive
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    // 1. Configuration.
    let mut config = match &args.config {
        Some(path) => config::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    info!(
        panel = %config.panel,
        shelves = config.bookshelf_count,
        seed = ?config.seed,
        "starting playtest"
    );

    // 2. Session and ticker.
    let session = SessionBuilder::new(config, MonotonicClock::new())
        .build()?
        .into_shared();
    let period = session.lock().tick_period();
    let (mut observer, events) = ChannelObserver::unbounded();
    let ticker = AttentionTicker::spawn(session.clone(), period, observer.clone())?;

    // 3. Play until the deadline.
    let mut tally = Tally::default();
    let pause = Duration::from_millis(args.move_ms);
    let deadline = Instant::now() + Duration::from_secs(args.seconds);

    while Instant::now() < deadline {
        {
            let mut s = session.lock();
            if s.is_caught() {
                s.acknowledge_caught(&mut observer);
            } else if args.reckless
                || !s.player().is_carrying_snack()
                || !watched(s.current_attention_state())
            {
                match plan_step(&*s) {
                    Some(direction) => {
                        s.move_player(direction, &mut observer);
                    }
                    None => debug!(position = %s.player().position(), "boxed in by bookshelves"),
                }
            }
        }
        drain(&events, &mut tally);
        thread::sleep(pause);
    }

    // 4. Summary.
    let ticks = ticker.stop();
    drain(&events, &mut tally);
    let final_count = session.lock().delivered_count();

    println!();
    println!("=== playtest: {} s ===", args.seconds);
    println!("  ticks run           : {ticks}");
    println!("  librarian changes   : {}", tally.transitions);
    println!("  snacks delivered    : {}", tally.delivered);
    println!("  best run            : {}", tally.best_run);
    println!("  current run         : {final_count}");
    println!("  caught (librarian)  : {}", tally.attention_catches);
    println!("  caught (bookshelf)  : {}", tally.collision_catches);

    Ok(())
}
