//! Uniformly random playouts over any [`RulesEngine`].
//!
//! Used to exercise engines end to end (tests, benchmarks, bindings). This
//! is not a search: every legal action is equally likely.

use tracing::{debug, trace};

use super::engine::{GameResult, RulesEngine};
use crate::core::GameRng;

/// How a playout ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayoutOutcome {
    /// Final result, or `None` if the ply limit was hit first.
    pub result: Option<GameResult>,

    /// Actions applied during the playout.
    pub plies: usize,
}

/// Play random legal actions until the game ends or `max_plies` is reached.
///
/// The engine is advanced in place. Returns the engine's error if it
/// refuses one of its own legal actions.
pub fn random_playout<E>(engine: &mut E, rng: &mut GameRng, max_plies: usize) -> Result<PlayoutOutcome, E::Error>
where
    E: RulesEngine,
{
    let mut plies = 0;

    while plies < max_plies {
        if let Some(result) = engine.is_terminal() {
            debug!(?result, plies, "playout finished");
            return Ok(PlayoutOutcome {
                result: Some(result),
                plies,
            });
        }

        let actions = engine.legal_actions();
        let Some(action) = rng.choose(&actions) else {
            break;
        };
        engine.apply_action(action)?;
        plies += 1;
        trace!(plies, "playout step");
    }

    Ok(PlayoutOutcome {
        result: engine.is_terminal(),
        plies,
    })
}
