//! An explicit, in-memory game tree implementing [`GameState`].
//!
//! An [`Outline`] describes the shape of a tree: the board, flags and optional
//! fixed value of every node, and its children in move order. A [`TreeNode`] is
//! a position inside that outline, linked back to the node it was reached from.
//! Nodes are produced lazily as the search walks the outline.
//!
//! Useful wherever a real move generator is unavailable or unwanted, such as
//! testing search behavior on hand-built or random trees.

use std::rc::Rc;

use rand::Rng;

use crate::boardrepr::PieceList;
use crate::coretypes::{Color, Score};
use crate::position::GameState;

/// Shape of a game tree. Player and turn are only read from the root outline;
/// every other node alternates player and increments turn from its parent.
#[derive(Debug, Clone)]
pub struct Outline {
    board: PieceList,
    player: Color,
    turn: u32,
    over: bool,
    check: bool,
    value: Option<Score>,
    children: Vec<Rc<Outline>>,
}

impl Outline {
    /// New node with an empty board and no children.
    pub fn new(player: Color) -> Self {
        Self {
            board: PieceList::new(),
            player,
            turn: 0,
            over: false,
            check: false,
            value: None,
            children: Vec::new(),
        }
    }

    /// New childless node carrying a fixed value.
    pub fn leaf(value: Score) -> Self {
        Self::new(Color::White).value(value)
    }

    /// Random tree where every internal node has `branching` children and every
    /// node carries a value drawn uniformly from `-100.0..100.0`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, depth: u32, branching: usize) -> Self {
        let mut outline = Self::leaf(rng.gen_range(-100.0..100.0));
        if depth > 0 {
            for _ in 0..branching {
                outline = outline.child(Self::random(rng, depth - 1, branching));
            }
        }
        outline
    }

    pub fn board(mut self, board: PieceList) -> Self {
        self.board = board;
        self
    }

    pub fn player(mut self, player: Color) -> Self {
        self.player = player;
        self
    }

    pub fn turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    /// Mark this node as the end of the game.
    pub fn over(mut self) -> Self {
        self.over = true;
        self
    }

    /// Mark the player to move at this node as in check.
    pub fn check(mut self) -> Self {
        self.check = true;
        self
    }

    pub fn value(mut self, value: Score) -> Self {
        self.value = Some(value);
        self
    }

    /// Append a child, after any existing children.
    pub fn child(mut self, child: Outline) -> Self {
        self.children.push(Rc::new(child));
        self
    }

    /// Append several children, in iteration order.
    pub fn children<I: IntoIterator<Item = Outline>>(mut self, children: I) -> Self {
        self.children.extend(children.into_iter().map(Rc::new));
        self
    }

    /// Number of nodes in this tree, including this one.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(|child| child.size()).sum::<usize>()
    }
}

/// A position within an [`Outline`].
#[derive(Debug, Clone)]
pub struct TreeNode {
    outline: Rc<Outline>,
    player: Color,
    turn: u32,
    index: Option<usize>,
    previous: Option<Rc<TreeNode>>,
}

impl TreeNode {
    /// The first position of a game described by `outline`.
    pub fn root(outline: Outline) -> Self {
        Self {
            player: outline.player,
            turn: outline.turn,
            outline: Rc::new(outline),
            index: None,
            previous: None,
        }
    }

    /// Fixed value given to this node by its outline.
    pub fn value(&self) -> Option<Score> {
        self.outline.value
    }

    /// Position of this node among its siblings, or None for the root.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Sibling indices leading from the root to this node.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut node = self;
        while let (Some(index), Some(previous)) = (node.index, node.previous.as_deref()) {
            path.push(index);
            node = previous;
        }
        path.reverse();
        path
    }
}

/// Two nodes are equal when they are the same outline node reached along the same path.
impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.outline, &other.outline) && self.previous == other.previous
    }
}

impl GameState for TreeNode {
    type Board = PieceList;
    type Successors = Successors;

    fn board(&self) -> &PieceList {
        &self.outline.board
    }

    fn player(&self) -> Color {
        self.player
    }

    fn is_over(&self) -> bool {
        self.outline.over
    }

    fn is_check(&self) -> bool {
        self.outline.check
    }

    fn turn(&self) -> u32 {
        self.turn
    }

    fn previous(&self) -> Option<&Self> {
        self.previous.as_deref()
    }

    fn successors(&self) -> Successors {
        Successors {
            parent: Rc::new(self.clone()),
            next: 0,
        }
    }
}

/// Iterator over the children of a [`TreeNode`], in outline order.
#[derive(Debug)]
pub struct Successors {
    parent: Rc<TreeNode>,
    next: usize,
}

impl Iterator for Successors {
    type Item = TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let outline = Rc::clone(self.parent.outline.children.get(self.next)?);
        let index = self.next;
        self.next += 1;

        Some(TreeNode {
            outline,
            player: !self.parent.player,
            turn: self.parent.turn + 1,
            index: Some(index),
            previous: Some(Rc::clone(&self.parent)),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.parent.outline.children.len() - self.next;
        (remaining, Some(remaining))
    }
}
