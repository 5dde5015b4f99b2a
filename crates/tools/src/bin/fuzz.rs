use anyhow::{Result, ensure};
use clap::Parser;
use maze_core::movement::collides;
use maze_core::{
    ControlScheme, GameConfig, LookDelta, MovementIntent, Session, SessionEvent, SessionPhase,
    TickInput,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 100_000)]
    ticks: u32,
    #[arg(long, default_value_t = 11)]
    width: usize,
    #[arg(long, default_value_t = 11)]
    height: usize,
    /// Per-tick movement speed below 1; larger values stress the collision resolver
    #[arg(long, default_value_t = 0.3)]
    speed: f32,
}

/// Uniform value in `[-1, 1]` with millesimal resolution.
fn unit(rng: &mut ChaCha8Rng) -> f32 {
    (rng.next_u64() % 2_001) as f32 / 1_000.0 - 1.0
}

#[derive(Default, Debug)]
struct Tally {
    keys: u32,
    escapes: u32,
    timeouts: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let config = GameConfig {
        maze_width: args.width,
        maze_height: args.height,
        move_speed: args.speed,
        ..GameConfig::default()
    };
    let mut session = Session::new(config, args.seed)?;
    session.begin(ControlScheme::MouseKeyboard)?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut tally = Tally::default();

    for tick in 0..args.ticks {
        let had_key = session.player().has_key;
        let input = TickInput {
            intent: MovementIntent::from_axes(unit(&mut rng), unit(&mut rng), args.speed),
            look: LookDelta { yaw: unit(&mut rng) * 0.5, pitch: unit(&mut rng) * 0.2 },
        };

        let mut events = session.step(&input);
        // One simulated second every sixty ticks.
        if tick % 60 == 59 {
            events.extend(session.tick_second());
        }

        for event in &events {
            match event {
                SessionEvent::KeyCollected => {
                    ensure!(!had_key, "key collected twice in one round at tick {tick}");
                    tally.keys += 1;
                }
                SessionEvent::Escaped => {
                    ensure!(
                        had_key || events.contains(&SessionEvent::KeyCollected),
                        "escaped without the key at tick {tick}"
                    );
                    tally.escapes += 1;
                }
                SessionEvent::TimedOut => tally.timeouts += 1,
            }
        }

        if session.phase() != SessionPhase::Playing {
            session.acknowledge()?;
            session.begin(ControlScheme::MouseKeyboard)?;
            continue;
        }

        let player = session.player();
        ensure!(!had_key || player.has_key, "key dropped mid-round at tick {tick}");
        ensure!(
            !collides(session.grid(), player.position, player.has_key),
            "player inside a block at {:?} on tick {tick}",
            player.position
        );
    }

    println!(
        "Fuzzing completed: {} keys, {} escapes, {} timeouts over {} mazes",
        tally.keys,
        tally.escapes,
        tally.timeouts,
        session.mazes_generated()
    );
    Ok(())
}
