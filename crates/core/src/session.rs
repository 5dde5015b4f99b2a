//! Session state machine: owns the current maze, the player, the countdown and the rng.
//!
//! Phases move `Setup -> Playing -> Won | Lost -> Setup`. Winning or running out of time
//! immediately prepares the next maze, so the outcome screen already sits on a fresh game.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use thiserror::Error;

use crate::config::{ConfigError, GameConfig};
use crate::input::{InputSource, TickInput};
use crate::maze::{GeneratedMaze, Grid, MazeGenerator};
use crate::movement::resolve;
use crate::player::PlayerState;
use crate::types::{ControlScheme, MovementEvent, Pos, RoundOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Setup,
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Begin,
    Acknowledge,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("cannot {action:?} while the session is {from:?}")]
    InvalidTransition { from: SessionPhase, action: SessionAction },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    KeyCollected,
    Escaped,
    TimedOut,
}

/// Read-only view handed to the presentation layer each frame.
#[derive(Clone, Copy, Debug)]
pub struct SessionSnapshot<'a> {
    pub phase: SessionPhase,
    pub grid: &'a Grid,
    pub start: Pos,
    pub player: PlayerState,
    pub time_left: u32,
    pub control: Option<ControlScheme>,
    pub last_outcome: Option<RoundOutcome>,
}

pub struct Session {
    config: GameConfig,
    generator: MazeGenerator,
    seed: u64,
    rng: ChaCha8Rng,
    maze: GeneratedMaze,
    player: PlayerState,
    time_left: u32,
    second_fraction: f32,
    phase: SessionPhase,
    control: Option<ControlScheme>,
    last_outcome: Option<RoundOutcome>,
    mazes_generated: u64,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, SessionError> {
        let generator = MazeGenerator::new(config.validate()?);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let maze = generator.generate(&mut rng);
        log::info!("seed {seed}: first maze {:016x}", maze.fingerprint());

        Ok(Self {
            player: PlayerState::spawn_at(maze.start),
            time_left: config.time_limit_secs,
            config,
            generator,
            seed,
            rng,
            maze,
            second_fraction: 0.0,
            phase: SessionPhase::Setup,
            control: None,
            last_outcome: None,
            mazes_generated: 1,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn maze(&self) -> &GeneratedMaze {
        &self.maze
    }

    pub fn grid(&self) -> &Grid {
        &self.maze.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn control(&self) -> Option<ControlScheme> {
        self.control
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    pub fn mazes_generated(&self) -> u64 {
        self.mazes_generated
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            phase: self.phase,
            grid: &self.maze.grid,
            start: self.maze.start,
            player: self.player,
            time_left: self.time_left,
            control: self.control,
            last_outcome: self.last_outcome,
        }
    }

    /// `Setup -> Playing` once a control scheme is chosen.
    pub fn begin(&mut self, control: ControlScheme) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Setup {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                action: SessionAction::Begin,
            });
        }
        self.control = Some(control);
        self.second_fraction = 0.0;
        self.phase = SessionPhase::Playing;
        log::info!("round started with {control:?}");
        Ok(())
    }

    /// `Won | Lost -> Setup`.
    pub fn acknowledge(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, SessionPhase::Won | SessionPhase::Lost) {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                action: SessionAction::Acknowledge,
            });
        }
        self.phase = SessionPhase::Setup;
        Ok(())
    }

    /// Throws away the current maze. A round in progress keeps playing on the new maze; a
    /// finished round returns to setup.
    pub fn restart(&mut self) {
        self.new_game();
        if matches!(self.phase, SessionPhase::Won | SessionPhase::Lost) {
            self.phase = SessionPhase::Setup;
        }
    }

    /// Polls `source` once and simulates one tick.
    pub fn run_tick<I: InputSource + ?Sized>(&mut self, source: &mut I) -> Vec<SessionEvent> {
        let input = source.poll();
        self.step(&input)
    }

    /// One simulation tick. Outside `Playing` the tick is skipped.
    pub fn step(&mut self, input: &TickInput) -> Vec<SessionEvent> {
        if self.phase != SessionPhase::Playing {
            return Vec::new();
        }

        self.player.orientation.apply(input.look);
        let resolution = resolve(
            self.player.position,
            self.player.orientation.yaw,
            &input.intent,
            &self.maze.grid,
            self.player.has_key,
        );
        self.player.position = resolution.position;

        let mut events = Vec::new();
        for event in resolution.events {
            match event {
                MovementEvent::KeyCollected => {
                    self.player.has_key = true;
                    log::info!("key collected with {}s left", self.time_left);
                    events.push(SessionEvent::KeyCollected);
                }
                MovementEvent::ExitReached => {
                    self.finish(RoundOutcome::Escaped);
                    events.push(SessionEvent::Escaped);
                    break;
                }
            }
        }
        events
    }

    /// Feeds elapsed wall time into the countdown, one decrement per whole second.
    pub fn advance_clock(&mut self, elapsed_secs: f32) -> Option<SessionEvent> {
        if self.phase != SessionPhase::Playing || !elapsed_secs.is_finite() || elapsed_secs <= 0.0
        {
            return None;
        }
        self.second_fraction += elapsed_secs;
        while self.second_fraction >= 1.0 {
            self.second_fraction -= 1.0;
            if let Some(event) = self.tick_second() {
                return Some(event);
            }
        }
        None
    }

    /// One countdown second. Reaching zero loses the round exactly once.
    pub fn tick_second(&mut self) -> Option<SessionEvent> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return None;
        }
        self.finish(RoundOutcome::TimedOut);
        Some(SessionEvent::TimedOut)
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        self.phase = match outcome {
            RoundOutcome::Escaped => SessionPhase::Won,
            RoundOutcome::TimedOut => SessionPhase::Lost,
        };
        self.last_outcome = Some(outcome);
        log::info!("round finished: {outcome:?}");
        self.new_game();
    }

    fn new_game(&mut self) {
        // Timer first, so no countdown tick can observe the previous round's state.
        self.time_left = self.config.time_limit_secs;
        self.second_fraction = 0.0;

        self.maze = self.generator.generate(&mut self.rng);
        self.player = PlayerState::spawn_at(self.maze.start);
        self.mazes_generated += 1;
        log::debug!("maze #{} ready: {:016x}", self.mazes_generated, self.maze.fingerprint());
    }
}
