//! Minimax implementation.

use std::time::Instant;

use crate::coretypes::{PlyKind, Score};
use crate::evaluation::Evaluator;
use crate::position::GameState;
use crate::search::SearchResult;

/// Base minimax call. Visits every node `ply` deep without pruning and without
/// any limit, so it is only suitable for small trees and for checking other searches.
///
/// Among children with equal scores, the first in successor order is selected.
pub fn minimax<S, E>(root: &S, ply: PlyKind, evaluator: &E) -> SearchResult<S>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    let instant = Instant::now();
    let mut nodes = 0;

    let (best_move, score) = if root.player().is_maximizing() {
        minimax_root::<S, E, MAX>(root, ply, evaluator, &mut nodes)
    } else {
        minimax_root::<S, E, MIN>(root, ply, evaluator, &mut nodes)
    };

    SearchResult {
        best_move,
        score,
        player: root.player(),
        depth: ply,
        nodes,
        cut_nodes: 0,
        elapsed: instant.elapsed(),
        stopped: false,
    }
}

const MAX: bool = true;
const MIN: bool = false;

/// Minimax root is almost the same as minimax impl, except it links a score to its child.
///
/// Minimax cannot prune any of its children directly because:
/// 1. Alpha and Beta are inherited as -Inf and +Inf.
/// 2. Only one of Alpha and Beta can be updated from a nodes children.
/// Thus, for the root position either Alpha or Beta will stay infinitely bounded,
/// so no pruning can occur.
fn minimax_root<S, E, const MAXIMIZING: bool>(
    root: &S,
    ply: PlyKind,
    evaluator: &E,
    nodes: &mut u64,
) -> (Option<S>, Score)
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    *nodes += 1;
    if root.is_over() || ply == 0 {
        return (None, evaluator.evaluate(root));
    }

    let mut best_move = None;
    let mut best_score;

    if MAXIMIZING {
        best_score = Score::NEG_INFINITY;

        for child in root.successors() {
            let child_score = minimax_impl::<S, E, MIN>(&child, ply - 1, evaluator, nodes);
            if child_score > best_score {
                best_score = child_score;
                best_move = Some(child);
            }
        }
    } else {
        best_score = Score::INFINITY;

        for child in root.successors() {
            let child_score = minimax_impl::<S, E, MAX>(&child, ply - 1, evaluator, nodes);
            if child_score < best_score {
                best_score = child_score;
                best_move = Some(child);
            }
        }
    }

    (best_move, best_score)
}

fn minimax_impl<S, E, const MAXIMIZING: bool>(
    state: &S,
    ply: PlyKind,
    evaluator: &E,
    nodes: &mut u64,
) -> Score
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
{
    *nodes += 1;

    // Stop at terminal node: Checkmate/Stalemate/last depth.
    if state.is_over() || ply == 0 {
        return evaluator.evaluate(state);
    }

    if MAXIMIZING {
        state
            .successors()
            .map(|child| minimax_impl::<S, E, MIN>(&child, ply - 1, evaluator, nodes))
            .fold(Score::NEG_INFINITY, Score::max)
    } else {
        state
            .successors()
            .map(|child| minimax_impl::<S, E, MAX>(&child, ply - 1, evaluator, nodes))
            .fold(Score::INFINITY, Score::min)
    }
}
