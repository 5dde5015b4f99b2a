pub mod autopilot;
pub mod config;
pub mod input;
pub mod maze;
pub mod movement;
pub mod player;
pub mod session;
pub mod types;

pub use autopilot::Autopilot;
pub use config::{ConfigError, GameConfig};
pub use input::{InputSource, ScriptedInput, TickInput};
pub use maze::{GeneratedMaze, Grid, MazeDimensions, MazeGenerator};
pub use movement::{Resolution, resolve};
pub use player::{Orientation, PlayerState};
pub use session::{Session, SessionError, SessionEvent, SessionPhase, SessionSnapshot};
pub use types::*;
