//! Search functions.

mod alpha_beta;
mod limit;
mod minimax;

pub use alpha_beta::*;
pub use limit::*;
pub use minimax::*;

use std::fmt::{self, Display};
use std::time::Duration;

use crate::coretypes::{Color, PlyKind, Score};
use crate::evaluation::Evaluator;
use crate::position::GameState;

/// The results found from running a search on some root position.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// The child of the root position selected for the player to move, if any.
    pub best_move: Option<S>,
    /// The score of making the best move, absolute (+White, -Black).
    pub score: Score,
    /// The player to move for the root position that was searched.
    pub player: Color,
    /// Depth in plies that was searched. This depth is only fully searched if `stopped` flag is false.
    pub depth: PlyKind,
    /// Total number of nodes visited in a search, including the root.
    pub nodes: u64,
    /// Number of nodes where remaining siblings were cut off.
    pub cut_nodes: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
    /// Flag that indicates the search limit was reached before the search completed.
    pub stopped: bool,
}

impl<S> SearchResult<S> {
    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        (self.nodes as f64 / self.elapsed.as_secs_f64()).round()
    }

    /// Converts the score of the search into one that is relative to search's root player.
    pub fn relative_score(&self) -> Score {
        self.score * self.player.sign()
    }

    /// Converts the score of the search into one that is absolute, with White as + and Black as -.
    pub fn absolute_score(&self) -> Score {
        self.score
    }

    /// Returns the color who is leading in the search of the root position, or None if even.
    pub fn leading(&self) -> Option<Color> {
        let score = self.absolute_score();
        if score > 0.0 {
            Some(Color::White)
        } else if score < 0.0 {
            Some(Color::Black)
        } else {
            None
        }
    }
}

impl<S> Display for SearchResult<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut displayed = String::new();
        displayed.push_str("SearchResult {\n");
        displayed.push_str(&format!("    has_move : {}\n", self.best_move.is_some()));
        displayed.push_str(&format!("    abs_score: {}\n", self.absolute_score()));
        displayed.push_str(&format!("    player   : {}\n", self.player));
        displayed.push_str(&format!("    depth    : {}\n", self.depth));
        displayed.push_str(&format!("    nodes    : {}\n", self.nodes));
        displayed.push_str(&format!("    nps      : {}\n", self.nps()));
        displayed.push_str(&format!(
            "    elapsed  : {}.{:03}s\n",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        ));
        displayed.push_str(&format!("    stopped  : {}\n", self.stopped));
        displayed.push_str(&format!("    cut_nodes: {}\n", self.cut_nodes));
        displayed.push_str("}\n");

        write!(f, "{displayed}")
    }
}

/// Select the position to move to from `root`, searching `ply` deep with alpha-beta.
///
/// Returns None if `root` is over, `ply` is 0, `root` has no successors,
/// or `limit` is reached before any successor was searched.
pub fn choose_move<S, E, L>(root: &S, ply: PlyKind, evaluator: &E, limit: &L) -> Option<S>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    L: SearchLimit + ?Sized,
{
    let best_move = alpha_beta(root, ply, evaluator, limit).best_move?;
    root_child(root, best_move, ply)
}

/// Walk back from `node` until reaching the position whose previous position is `root`.
/// At most `max_steps` positions above `node` are visited.
///
/// Returns None if `root` is not found within `max_steps` steps.
pub fn root_child<S: GameState>(root: &S, node: S, max_steps: PlyKind) -> Option<S> {
    let mut node = node;
    for _ in 0..=max_steps {
        let previous = node.previous()?;
        if previous == root {
            return Some(node);
        }
        node = previous.clone();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Color::*;
    use crate::tree::{Outline, TreeNode};

    fn value(node: &TreeNode) -> Score {
        node.value().unwrap_or(0.0)
    }

    fn two_ply_root() -> TreeNode {
        TreeNode::root(
            Outline::new(White)
                .child(Outline::new(White).children([Outline::leaf(-1.0), Outline::leaf(4.0)]))
                .child(Outline::new(White).children([Outline::leaf(3.0), Outline::leaf(5.0)])),
        )
    }

    #[test]
    fn chosen_move_follows_root() {
        let root = two_ply_root();
        let chosen = choose_move(&root, 2, &value, &Unlimited).unwrap();
        assert_eq!(chosen.previous(), Some(&root));
        assert_eq!(chosen.index(), Some(1));
    }

    #[test]
    fn root_child_walks_up() {
        let root = two_ply_root();
        let child = root.successors().nth(1).unwrap();
        let grandchild = child.successors().next().unwrap();

        assert_eq!(root_child(&root, grandchild.clone(), 2), Some(child.clone()));
        assert_eq!(root_child(&root, child.clone(), 0), Some(child));
        assert_eq!(root_child(&root, grandchild, 0), None);
        assert_eq!(root_child(&root, root.clone(), 4), None);
    }

    #[test]
    fn leading_color() {
        let root = two_ply_root();
        let mut result = alpha_beta(&root, 2, &value, &Unlimited);
        assert_eq!(result.score, 3.0);
        assert_eq!(result.leading(), Some(White));

        result.player = Black;
        assert_eq!(result.relative_score(), -3.0);

        result.score = 0.0;
        assert_eq!(result.leading(), None);
    }
}
