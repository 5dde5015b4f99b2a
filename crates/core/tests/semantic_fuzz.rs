use maze_core::movement::collides;
use maze_core::{
    ControlScheme, GameConfig, LookDelta, MovementIntent, Session, SessionEvent, SessionPhase,
    TickInput,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn unit(rng: &mut ChaCha8Rng) -> f32 {
    (rng.next_u64() % 2_001) as f32 / 1_000.0 - 1.0
}

fn run_fuzz_simulation(maze_seed: u64, input_seed: u64, ticks: u32) -> Result<(), String> {
    let config = GameConfig { maze_width: 9, maze_height: 9, ..GameConfig::default() };
    let mut session = Session::new(config, maze_seed).map_err(|err| err.to_string())?;
    session.begin(ControlScheme::MouseKeyboard).map_err(|err| err.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);

    for tick in 0..ticks {
        let had_key = session.player().has_key;
        let input = TickInput {
            intent: MovementIntent::from_axes(unit(&mut rng), unit(&mut rng), 0.3),
            look: LookDelta { yaw: unit(&mut rng) * 0.5, pitch: unit(&mut rng) * 0.2 },
        };
        let events = session.step(&input);

        if events.contains(&SessionEvent::Escaped) {
            if !had_key && !events.contains(&SessionEvent::KeyCollected) {
                return Err(format!("escaped without the key at tick {tick}, seed {maze_seed}"));
            }
            session.acknowledge().map_err(|err| err.to_string())?;
            session.begin(ControlScheme::MouseKeyboard).map_err(|err| err.to_string())?;
            continue;
        }
        if session.phase() != SessionPhase::Playing {
            return Err(format!("left play without an outcome at tick {tick}"));
        }

        let player = session.player();
        if had_key && !player.has_key {
            return Err(format!("key dropped mid-round at tick {tick}, seed {maze_seed}"));
        }
        if collides(session.grid(), player.position, player.has_key) {
            return Err(format!(
                "player inside a block at {:?} on tick {tick}, seed {maze_seed}",
                player.position
            ));
        }
    }
    Ok(())
}

#[test]
fn test_fuzz_session_movement() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(24));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(maze_seed, input_seed)| {
            run_fuzz_simulation(maze_seed, input_seed, 3_000).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("random play should preserve movement invariants");
}
