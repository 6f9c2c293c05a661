//! Minimax with Alpha-Beta pruning implementation.

use std::time::Instant;

use crate::coretypes::{PlyKind, Score};
use crate::evaluation::Evaluator;
use crate::position::GameState;
use crate::search::{SearchLimit, SearchResult};

/// Base alpha_beta call. White to move at `root` maxes, Black to move mins.
/// Searches every line `ply` deep unless `limit` is reached first, and returns
/// the child of `root` selected for the player to move along with its score.
pub fn alpha_beta<S, E, L>(root: &S, ply: PlyKind, evaluator: &E, limit: &L) -> SearchResult<S>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    L: SearchLimit + ?Sized,
{
    let instant = Instant::now();
    let mut context = Context {
        evaluator,
        limit,
        nodes: 0,
        cut_nodes: 0,
        stopped: false,
    };

    let (best_move, score) = if root.player().is_maximizing() {
        context.alpha_beta_impl::<S, MAX>(root, ply, Score::NEG_INFINITY, Score::INFINITY)
    } else {
        context.alpha_beta_impl::<S, MIN>(root, ply, Score::NEG_INFINITY, Score::INFINITY)
    };

    SearchResult {
        best_move,
        score,
        player: root.player(),
        depth: ply,
        nodes: context.nodes,
        cut_nodes: context.cut_nodes,
        elapsed: instant.elapsed(),
        stopped: context.stopped,
    }
}

const MAX: bool = true;
const MIN: bool = false;

/// Properties of Alpha-Beta pruning.
/// * The maxing player can only update alpha from its children.
/// * The minning player can only update beta from its children.
/// * Alpha and Beta can only be inherited from their ancestors, and are otherwise Alpha=-Inf, Beta=Inf.
/// * Alpha is usually less than Beta. When they are equal or cross, a cut off occurs.
///
/// A node selects the first child whose score moves past the node's bound, and
/// a later child replaces it only by moving past the raised bound, so the first
/// of several tied children is kept.
///
/// Once the limit cuts a child's subtree short, that child is discarded unless
/// no sibling was selected before it.
struct Context<'a, E: ?Sized, L: ?Sized> {
    evaluator: &'a E,
    limit: &'a L,
    nodes: u64,
    cut_nodes: u64,
    stopped: bool,
}

impl<'a, E, L> Context<'a, E, L>
where
    E: ?Sized,
    L: SearchLimit + ?Sized,
{
    fn limit_reached(&mut self) -> bool {
        let reached = self.limit.reached(self.nodes);
        self.stopped |= reached;
        reached
    }

    fn alpha_beta_impl<S, const MAXIMIZING: bool>(
        &mut self,
        state: &S,
        ply: PlyKind,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Option<S>, Score)
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes += 1;

        // Stop at terminal node: Checkmate/Stalemate/last depth.
        if state.is_over() || ply == 0 {
            return (None, self.evaluator.evaluate(state));
        }

        let mut best_move = None;
        let mut successors = state.successors();

        if MAXIMIZING {
            let mut best_score = Score::NEG_INFINITY;

            while !self.limit_reached() {
                let child = match successors.next() {
                    Some(child) => child,
                    None => break,
                };
                let (_, child_score) = self.alpha_beta_impl::<S, MIN>(&child, ply - 1, alpha, beta);
                if self.stopped && best_move.is_some() {
                    break;
                }

                best_score = best_score.max(child_score);
                if best_score > alpha {
                    best_move = Some(child);
                }
                alpha = alpha.max(best_score);
                if beta <= alpha {
                    // Beta cutoff
                    self.cut_nodes += 1;
                    break;
                }
            }
            (best_move, best_score)
        } else {
            let mut best_score = Score::INFINITY;

            while !self.limit_reached() {
                let child = match successors.next() {
                    Some(child) => child,
                    None => break,
                };
                let (_, child_score) = self.alpha_beta_impl::<S, MAX>(&child, ply - 1, alpha, beta);
                if self.stopped && best_move.is_some() {
                    break;
                }

                best_score = best_score.min(child_score);
                if best_score < beta {
                    best_move = Some(child);
                }
                beta = beta.min(best_score);
                if beta <= alpha {
                    // Alpha cutoff
                    self.cut_nodes += 1;
                    break;
                }
            }
            (best_move, best_score)
        }
    }
}
