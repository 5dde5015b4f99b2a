//! Polled input capability: one movement intent and one look delta per tick.

use std::collections::VecDeque;

use crate::types::{LookDelta, MovementIntent};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickInput {
    pub intent: MovementIntent,
    pub look: LookDelta,
}

impl TickInput {
    pub const IDLE: TickInput =
        TickInput { intent: MovementIntent::IDLE, look: LookDelta { yaw: 0.0, pitch: 0.0 } };
}

pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Plays back queued inputs, then idles.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    queued: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self { queued: inputs.into_iter().collect() }
    }

    pub fn push(&mut self, input: TickInput) {
        self.queued.push_back(input);
    }

    pub fn remaining(&self) -> usize {
        self.queued.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.queued.pop_front().unwrap_or(TickInput::IDLE)
    }
}
