//! Heuristic
//!
//! Tests that the engine, scoring piece placements with its heuristic,
//! picks up material and prefers checkmate over material.

use lookahead_engine::boardrepr::PieceList;
use lookahead_engine::coretypes::{Color, Color::*};
use lookahead_engine::tree::{Outline, TreeNode};
use lookahead_engine::{EngineBuilder, GameState};

fn position(placement: &str, player: Color) -> Outline {
    Outline::new(player)
        .board(PieceList::from_placement(placement).unwrap())
        .turn(20)
}

#[test]
fn takes_free_rook_over_defended_one() {
    let root = TreeNode::root(
        position("3rk3/8/8/3r4/r7/8/8/3QK3", White)
            // Qxa4, then Black steps aside.
            .child(
                position("3rk3/8/8/3r4/Q7/8/8/4K3", Black)
                    .child(position("3r1k2/8/8/3r4/Q7/8/8/4K3", White)),
            )
            // Qxd5, then Black may take back with the d8 rook.
            .child(
                position("3rk3/8/8/3Q4/r7/8/8/4K3", Black)
                    .child(position("4k3/8/8/3r4/r7/8/8/4K3", White))
                    .child(position("3r1k2/8/8/3Q4/r7/8/8/4K3", White)),
            ),
    );
    let engine = EngineBuilder::new().depth(2).build().unwrap();
    let chosen = engine.select_move(&root).unwrap();

    assert_eq!(chosen.index(), Some(0));
    assert_eq!(chosen.previous(), Some(&root));
}

#[test]
fn prefers_mate_to_material() {
    let engine = EngineBuilder::new().depth(1).build().unwrap();

    let root = TreeNode::root(
        position("4k3/8/4K3/8/8/8/8/r2Q4", White)
            .child(position("4k3/8/4K3/8/8/8/8/Q7", Black))
            .child(position("3Qk3/8/4K3/8/8/8/8/r7", Black).over().check()),
    );
    assert_eq!(engine.select_move(&root).unwrap().index(), Some(1));

    let root = TreeNode::root(
        position("4k3/8/8/8/8/8/3q4/3QK3", Black)
            .child(position("4k3/8/8/8/8/8/8/3qK3", White).over().check())
            .child(position("4k3/8/8/8/8/8/8/3QK3", White)),
    );
    assert_eq!(engine.select_move(&root).unwrap().index(), Some(0));
}

#[test]
fn search_reports_leader() {
    let root = TreeNode::root(
        position("4k3/8/8/8/8/8/8/3QK3", Black)
            .child(position("4k3/8/8/8/3Q4/8/8/4K3", White))
            .child(position("4k3/8/8/8/8/8/8/Q3K3", White)),
    );
    let engine = EngineBuilder::new().depth(1).debug(true).build().unwrap();
    let result = engine.search(&root, &|_nodes: u64| false);

    assert_eq!(result.score, 10.0);
    assert_eq!(result.leading(), Some(White));
    assert_eq!(result.nodes, 3);
    assert_eq!(result.best_move.unwrap().index(), Some(1));
}
