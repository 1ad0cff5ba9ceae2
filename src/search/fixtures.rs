//! Explicit game trees for search tests

use std::rc::Rc;

use crate::board::{GameState, Move, Player};

/// Tree description: a node value plus children
#[derive(Debug, Clone)]
pub struct NodeDef {
    value: f64,
    children: Vec<NodeDef>,
}

pub fn leaf(value: f64) -> NodeDef {
    NodeDef {
        value,
        children: Vec::new(),
    }
}

pub fn node(value: f64, children: Vec<NodeDef>) -> NodeDef {
    NodeDef { value, children }
}

#[derive(Debug)]
struct Tree {
    values: Vec<f64>,
    children: Vec<Vec<usize>>,
}

impl Tree {
    fn push(&mut self, def: &NodeDef) -> usize {
        let id = self.values.len();
        self.values.push(def.value);
        self.children.push(Vec::new());
        for child in &def.children {
            let child_id = self.push(child);
            self.children[id].push(child_id);
        }
        id
    }
}

/// Position in an explicit tree. Values are from Player One's view and
/// Player One moves at the root.
#[derive(Debug, Clone)]
pub struct TreeState {
    tree: Rc<Tree>,
    node: usize,
    active: Player,
}

impl TreeState {
    pub fn new(def: NodeDef) -> Self {
        let mut tree = Tree {
            values: Vec::new(),
            children: Vec::new(),
        };
        let root = tree.push(&def);
        Self {
            tree: Rc::new(tree),
            node: root,
            active: Player::One,
        }
    }

    /// Move that leads to the `i`-th child
    pub fn child_move(&self, i: usize) -> Move {
        Move::new(0, i as i32)
    }

    fn child_count(&self) -> usize {
        self.tree.children[self.node].len()
    }
}

impl GameState for TreeState {
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves_for(&self, _player: Player) -> Vec<Move> {
        (0..self.child_count()).map(|i| self.child_move(i)).collect()
    }

    fn apply_move(&self, mv: Move) -> Self {
        Self {
            tree: Rc::clone(&self.tree),
            node: self.tree.children[self.node][mv.col as usize],
            active: self.active.opponent(),
        }
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active && self.child_count() == 0
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.child_count() == 0
    }

    fn player_location(&self, _player: Player) -> Option<Move> {
        None
    }

    fn width(&self) -> usize {
        0
    }

    fn height(&self) -> usize {
        0
    }
}

/// Evaluator reading the node value
pub fn leaf_value(state: &TreeState, player: Player) -> f64 {
    let value = state.tree.values[state.node];
    match player {
        Player::One => value,
        Player::Two => -value,
    }
}
