//! Selection
//!
//! Tests that alpha-beta selects the same moves as an exhaustive search,
//! prunes where it can, and honors search limits.

use rand::rngs::StdRng;
use rand::SeedableRng;

use lookahead_engine::coretypes::{Color, Color::*, Score};
use lookahead_engine::search::{self, NodeLimit, StopFlag, Unlimited};
use lookahead_engine::tree::{Outline, TreeNode};
use lookahead_engine::GameState;

fn value(node: &TreeNode) -> Score {
    node.value().unwrap_or(0.0)
}

/// Tree where every node at `depth` below holds `leaf_value`.
fn uniform(depth: u32, branching: usize, leaf_value: Score) -> Outline {
    if depth == 0 {
        return Outline::leaf(leaf_value);
    }
    (0..branching).fold(Outline::new(White), |outline, _| {
        outline.child(uniform(depth - 1, branching, leaf_value))
    })
}

fn agreement_tester(seed: u64, depth: u32, branching: usize, player: Color) {
    let mut rng = StdRng::seed_from_u64(seed);
    let root = TreeNode::root(Outline::random(&mut rng, depth, branching).player(player));
    let ply = depth as u8;

    let pruned = search::alpha_beta(&root, ply, &value, &Unlimited);
    let full = search::minimax(&root, ply, &value);

    let pruned_index = pruned.best_move.as_ref().and_then(TreeNode::index);
    let full_index = full.best_move.as_ref().and_then(TreeNode::index);
    assert_eq!(pruned_index, full_index);
    assert_eq!(pruned.score, full.score);
    assert_eq!(full.nodes as usize, root_size(seed, depth, branching));
    assert!(pruned.nodes <= full.nodes);
}

fn root_size(seed: u64, depth: u32, branching: usize) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    Outline::random(&mut rng, depth, branching).size()
}

#[test]
fn alpha_beta_agrees_with_minimax_for_white() {
    for seed in 0..8 {
        agreement_tester(seed, 4, 3, White);
    }
    agreement_tester(100, 3, 6, White);
}

#[test]
fn alpha_beta_agrees_with_minimax_for_black() {
    for seed in 0..8 {
        agreement_tester(seed, 4, 3, Black);
    }
    agreement_tester(101, 5, 2, Black);
}

#[test]
fn dominant_first_move_prunes_siblings() {
    let outline = Outline::new(White)
        .child(uniform(2, 3, 10.0))
        .children((0..2).map(|_| uniform(2, 3, 0.0)));
    let size = outline.size();
    let root = TreeNode::root(outline);

    let pruned = search::alpha_beta(&root, 3, &value, &Unlimited);
    let full = search::minimax(&root, 3, &value);

    assert_eq!(full.nodes as usize, size);
    assert!((pruned.nodes as usize) < size);
    assert!(pruned.cut_nodes > 0);
    assert_eq!(pruned.best_move.unwrap().index(), Some(0));
    assert_eq!(full.best_move.unwrap().index(), Some(0));
}

#[test]
fn depth_one_picks_best_child() {
    let root = TreeNode::root(
        Outline::new(White)
            .child(Outline::leaf(5.0))
            .child(Outline::leaf(3.0)),
    );
    let chosen = search::choose_move(&root, 1, &value, &Unlimited).unwrap();
    assert_eq!(chosen.value(), Some(5.0));
    assert_eq!(chosen.previous(), Some(&root));
}

#[test]
fn chosen_move_is_a_root_successor() {
    for seed in 0..4 {
        let mut rng = StdRng::seed_from_u64(seed);
        let root = TreeNode::root(Outline::random(&mut rng, 4, 4));
        let chosen = search::choose_move(&root, 4, &value, &Unlimited).unwrap();

        assert_eq!(chosen.previous(), Some(&root));
        assert_eq!(chosen.path().len(), 1);
        assert!(root.successors().any(|child| child == chosen));
    }
}

#[test]
fn limit_after_first_successor_keeps_it() {
    let root = TreeNode::root(
        Outline::new(White)
            .child(Outline::leaf(-50.0))
            .child(Outline::leaf(50.0))
            .child(Outline::leaf(90.0)),
    );
    let chosen = search::choose_move(&root, 1, &value, &NodeLimit(2)).unwrap();
    assert_eq!(chosen.index(), Some(0));

    let counted = |nodes: u64| nodes >= 3;
    let chosen = search::choose_move(&root, 1, &value, &counted).unwrap();
    assert_eq!(chosen.index(), Some(1));
}

/// Two moves of two replies each. The first move's replies score `first`,
/// the second move's replies score `second`.
fn two_by_two(player: Color, first: [Score; 2], second: [Score; 2]) -> TreeNode {
    let replies = |scores: [Score; 2]| Outline::new(player).children(scores.map(Outline::leaf));
    TreeNode::root(Outline::new(player).child(replies(first)).child(replies(second)))
}

#[test]
fn limit_inside_first_successor_keeps_it() {
    // Stops after the first reply to the first move.
    let root = two_by_two(White, [5.0, 6.0], [7.0, 8.0]);
    let result = search::alpha_beta(&root, 2, &value, &NodeLimit(3));
    assert!(result.stopped);
    assert_eq!(result.score, 5.0);
    assert_eq!(result.best_move.unwrap().index(), Some(0));

    let root = two_by_two(Black, [5.0, 6.0], [1.0, 2.0]);
    let chosen = search::choose_move(&root, 2, &value, &NodeLimit(3)).unwrap();
    assert_eq!(chosen.index(), Some(0));
}

#[test]
fn limit_entering_later_successor_ignores_it() {
    // The second move is entered as node 5 and expands nothing.
    let root = two_by_two(White, [5.0, 6.0], [-90.0, -99.0]);
    let result = search::alpha_beta(&root, 2, &value, &NodeLimit(5));
    assert!(result.stopped);
    assert_eq!(result.score, 5.0);
    assert_eq!(result.best_move.unwrap().index(), Some(0));

    let root = two_by_two(Black, [5.0, 6.0], [90.0, 99.0]);
    let result = search::alpha_beta(&root, 2, &value, &NodeLimit(5));
    assert!(result.stopped);
    assert_eq!(result.score, 6.0);
    assert_eq!(result.best_move.unwrap().index(), Some(0));

    let root = two_by_two(Black, [5.0, 6.0], [90.0, 99.0]);
    let chosen = search::choose_move(&root, 2, &value, &NodeLimit(5)).unwrap();
    assert_eq!(chosen.index(), Some(0));
}

#[test]
fn stop_flag_raised_mid_search_keeps_searched_move() {
    let root = two_by_two(White, [5.0, 6.0], [-90.0, -99.0]);
    let flag = StopFlag::new();
    let stop_on_fifth = |nodes: u64| {
        if nodes >= 5 {
            flag.stop();
        }
        flag.is_stopped()
    };
    let chosen = search::choose_move(&root, 2, &value, &stop_on_fifth).unwrap();
    assert_eq!(chosen.index(), Some(0));
    assert!(flag.is_stopped());
}

#[test]
fn degenerate_roots_select_nothing() {
    let leaf = TreeNode::root(Outline::new(White));
    let over = TreeNode::root(Outline::new(White).over().child(Outline::leaf(1.0)));
    let parent = TreeNode::root(Outline::new(White).child(Outline::leaf(1.0)));

    let stopped = StopFlag::new();
    stopped.stop();

    assert_eq!(search::choose_move(&leaf, 4, &value, &Unlimited), None);
    assert_eq!(search::choose_move(&over, 4, &value, &Unlimited), None);
    assert_eq!(search::choose_move(&parent, 0, &value, &Unlimited), None);
    assert_eq!(search::choose_move(&parent, 4, &value, &stopped), None);

    stopped.unstop();
    assert!(search::choose_move(&parent, 4, &value, &stopped).is_some());
}
