//! Per-fight shared state handed to every turn, skill and hook.

use std::fmt;

use tracing::trace;

use crate::rng::BattleRng;

/// Where turn-log lines go.
#[derive(Clone, Debug, PartialEq, Eq)]
enum LogSink {
    Discard,
    Buffer(Vec<String>),
}

/// Shared mutable state of one fight.
///
/// Holds the random stream, the turn counter and the turn log. Whether the
/// log is kept is decided when the context is built ([`quiet`](Self::quiet)
/// or [`verbose`](Self::verbose)); every line is also emitted as a `trace`
/// event under the `arena::turn` target.
#[derive(Clone, Debug)]
pub struct BattleContext {
    turn_index: u64,
    rng: BattleRng,
    sink: LogSink,
}

impl BattleContext {
    /// Context that drops turn-log lines.
    pub fn quiet(rng: BattleRng) -> Self {
        Self {
            turn_index: 0,
            rng,
            sink: LogSink::Discard,
        }
    }

    /// Context that buffers turn-log lines until drained.
    pub fn verbose(rng: BattleRng) -> Self {
        Self {
            turn_index: 0,
            rng,
            sink: LogSink::Buffer(Vec::new()),
        }
    }

    /// Number of turns started so far in this fight.
    pub fn turn_index(&self) -> u64 {
        self.turn_index
    }

    pub(crate) fn advance_turn(&mut self) -> u64 {
        self.turn_index += 1;
        self.turn_index
    }

    pub fn rng(&mut self) -> &mut BattleRng {
        &mut self.rng
    }

    /// Rolls against a probability using the fight's stream.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.chance(probability)
    }

    pub fn is_logging(&self) -> bool {
        matches!(self.sink, LogSink::Buffer(_))
    }

    /// Appends a line to the turn log.
    ///
    /// Pass `format_args!` to skip allocation when the context is quiet.
    pub fn log(&mut self, message: impl fmt::Display) {
        trace!(target: "arena::turn", turn = self.turn_index, "{}", message);
        if let LogSink::Buffer(lines) = &mut self.sink {
            lines.push(message.to_string());
        }
    }

    /// Takes every line logged since the last drain.
    pub fn drain_log(&mut self) -> Vec<String> {
        match &mut self.sink {
            LogSink::Buffer(lines) => std::mem::take(lines),
            LogSink::Discard => Vec::new(),
        }
    }

    /// Ends the fight and returns the random stream at its current position.
    pub fn into_rng(self) -> BattleRng {
        self.rng
    }
}
