//! Engine struct acts as a simplified API for selecting moves with the Lookahead engine.

use tracing::{debug, info, warn};

use crate::coretypes::{PlyKind, MAX_DEPTH};
use crate::error::{self, ErrorKind};
use crate::evaluation::{EvalConfig, Heuristic};
use crate::position::GameState;
use crate::search::{self, SearchLimit, SearchResult, StopFlag};

/// EngineBuilder allows for parameters of an Engine to be set and checked once.
///
/// Default values:
///
/// * `depth`: 4
/// * `eval`: `EvalConfig::default()`
/// * `debug`: false
#[derive(Debug, Clone, PartialEq)]
pub struct EngineBuilder {
    depth: PlyKind,
    eval: EvalConfig,
    debug: bool,
}

impl EngineBuilder {
    /// Create a new default EngineBuilder.
    pub fn new() -> Self {
        Self {
            depth: Engine::DEFAULT_DEPTH,
            eval: EvalConfig::default(),
            debug: false,
        }
    }

    /// Create and return a new Engine.
    /// Returns Err if the depth is not in `1..=MAX_DEPTH` or the eval config is invalid.
    pub fn build(&self) -> error::Result<Engine> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err((
                ErrorKind::EngineDepthOutOfRange,
                format!("depth {} not in 1..={MAX_DEPTH}", self.depth),
            )
                .into());
        }
        self.eval.validate()?;

        Ok(Engine {
            depth: self.depth,
            heuristic: Heuristic::new(self.eval),
            stopper: StopFlag::new(),
            debug: self.debug,
        })
    }

    /// Set the fixed depth in plies of every search.
    pub fn depth(mut self, depth: PlyKind) -> Self {
        self.depth = depth;
        self
    }

    /// Set the parameters of the heuristic evaluation.
    pub fn eval(mut self, eval: EvalConfig) -> Self {
        self.eval = eval;
        self
    }

    /// Set whether the engine begins in debug mode.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine wraps up all parameters required for selecting a move from a position.
///
/// The engine owns a stop flag which every search it runs polls.
/// Clones of the flag may be handed to other threads to stop a search early.
#[derive(Debug, Clone)]
pub struct Engine {
    depth: PlyKind,
    heuristic: Heuristic,
    stopper: StopFlag,
    debug: bool,
}

impl Engine {
    pub const DEFAULT_DEPTH: PlyKind = 4;

    pub fn new() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            heuristic: Heuristic::default(),
            stopper: StopFlag::new(),
            debug: false,
        }
    }

    /// Returns the fixed search depth of engine.
    pub fn depth(&self) -> PlyKind {
        self.depth
    }

    /// Returns reference to the evaluation used by engine.
    pub fn heuristic(&self) -> &Heuristic {
        &self.heuristic
    }

    /// Returns reference to current debug flag of engine.
    pub fn debug(&self) -> &bool {
        &self.debug
    }

    /// Update the engine's debug parameter.
    pub fn set_debug(&mut self, new_debug: bool) {
        self.debug = new_debug;
    }

    /// Returns a handle to the flag polled by this engine's searches.
    pub fn stopper(&self) -> StopFlag {
        self.stopper.clone()
    }

    /// Informs any active search to stop searching as soon as possible.
    /// Searches keep stopping immediately until `unstop` is called.
    pub fn stop(&self) {
        self.stopper.stop();
    }

    /// Allows searches to run again after `stop`.
    pub fn unstop(&self) {
        self.stopper.unstop();
    }

    /// Select the position to move to from `root` for the player to move.
    /// Returns None if `root` has no move to make, or the engine is stopped.
    pub fn select_move<S: GameState>(&self, root: &S) -> Option<S> {
        self.select_move_within(root, &self.stopper)
    }

    /// Select the position to move to from `root`, polling `limit` as well as
    /// the engine's stop flag.
    pub fn select_move_within<S, L>(&self, root: &S, limit: &L) -> Option<S>
    where
        S: GameState,
        L: SearchLimit + ?Sized,
    {
        let stopper = &self.stopper;
        let both = |nodes: u64| stopper.is_stopped() || limit.reached(nodes);

        let result = self.search(root, &both);
        let selected = result
            .best_move
            .and_then(|best_move| search::root_child(root, best_move, self.depth));

        if selected.is_none() {
            warn!(turn = root.turn(), player = %root.player(), "no move selected");
        }
        selected
    }

    /// Run a blocking alpha-beta search from `root` to the engine's depth,
    /// stopping early if `limit` is reached.
    pub fn search<S, L>(&self, root: &S, limit: &L) -> SearchResult<S>
    where
        S: GameState,
        L: SearchLimit + ?Sized,
    {
        let result = search::alpha_beta(root, self.depth, &self.heuristic, limit);
        self.log_result(&result);
        result
    }

    fn log_result<S>(&self, result: &SearchResult<S>) {
        let elapsed_ms = result.elapsed.as_millis() as u64;
        if self.debug {
            info!(
                depth = result.depth,
                nodes = result.nodes,
                cut_nodes = result.cut_nodes,
                score = result.score,
                elapsed_ms,
                stopped = result.stopped,
                "search finished"
            );
        } else {
            debug!(
                depth = result.depth,
                nodes = result.nodes,
                cut_nodes = result.cut_nodes,
                score = result.score,
                elapsed_ms,
                stopped = result.stopped,
                "search finished"
            );
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
