//! Search node representation.
//!
//! Each node represents one crossing applied on top of its parent's state.
//! Nodes live in a [`NodeArena`] and refer to their parent by index.

use crossing_core::{Budget, Crossing, CrossingKind, Roster, Side};

/// What produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The root: every horse on the start bank, nothing crossed yet.
    Initial,
    /// A forward crossing was just made.
    Forward,
    /// A return crossing was just made.
    Return,
}

impl NodeKind {
    /// Returns the bank the next crossing departs from.
    #[inline]
    pub fn next_departure(self) -> Side {
        match self {
            NodeKind::Initial | NodeKind::Return => Side::Start,
            NodeKind::Forward => Side::Far,
        }
    }
}

impl From<CrossingKind> for NodeKind {
    fn from(kind: CrossingKind) -> Self {
        match kind {
            CrossingKind::Forward => NodeKind::Forward,
            CrossingKind::Return => NodeKind::Return,
        }
    }
}

/// A node in the search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Parent node index in the arena (None for root).
    parent_index: Option<usize>,

    kind: NodeKind,

    /// The crossing made to reach this node (None for root).
    crossing: Option<Crossing>,

    /// Number of crossings from the root.
    depth: usize,

    /// Sum of crossing costs from the root.
    total_time: u64,
}

impl SearchNode {
    /// Creates the root node.
    pub fn root() -> Self {
        Self {
            parent_index: None,
            kind: NodeKind::Initial,
            crossing: None,
            depth: 0,
            total_time: 0,
        }
    }

    /// Creates a child of `parent`, stored at `parent_index`.
    ///
    /// Returns `None` if the child's total time would overflow.
    pub fn child(parent_index: usize, parent: &SearchNode, crossing: Crossing) -> Option<Self> {
        let total_time = parent.total_time.checked_add(crossing.cost())?;
        Some(Self {
            parent_index: Some(parent_index),
            kind: crossing.kind().into(),
            depth: parent.depth + 1,
            total_time,
            crossing: Some(crossing),
        })
    }

    #[inline]
    pub fn parent_index(&self) -> Option<usize> {
        self.parent_index
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn crossing(&self) -> Option<&Crossing> {
        self.crossing.as_ref()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn total_time(&self) -> u64 {
        self.total_time
    }
}

/// Returns whether every member of `crossing` stays within `budget` after
/// taking it, given the roster state before the crossing.
///
/// This is the only pruning rule of the search.
pub fn is_viable(crossing: &Crossing, roster: &Roster, budget: Budget) -> bool {
    crossing
        .members()
        .iter()
        .all(|&id| budget.admits(roster.horse(id).spent(), crossing.cost()))
}

/// Index-addressed storage for the nodes on the current search path.
///
/// The search is depth-first, so nodes are pushed on descent and popped on
/// backtrack; the arena never holds siblings of already explored subtrees.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

/// Arena index of the root node.
pub const ROOT: usize = 0;

impl NodeArena {
    /// Creates an arena holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![SearchNode::root()],
        }
    }

    /// Creates an arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::root());
        Self { nodes }
    }

    /// Returns the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }

    /// Adds a child of `parent_index` and returns its index.
    ///
    /// Returns `None`, leaving the arena unchanged, if the child's total
    /// time would overflow.
    pub fn push_child(&mut self, parent_index: usize, crossing: Crossing) -> Option<usize> {
        let child = SearchNode::child(parent_index, &self.nodes[parent_index], crossing)?;
        self.nodes.push(child);
        Some(self.nodes.len() - 1)
    }

    /// Removes the most recently pushed node.
    ///
    /// Returns `None` if only the root is left.
    pub fn pop(&mut self) -> Option<SearchNode> {
        if self.nodes.len() <= 1 {
            return None;
        }
        self.nodes.pop()
    }

    /// Returns the number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Rebuilds the crossings from the root to `index` by following
    /// parent indices.
    pub fn path(&self, index: usize) -> Vec<Crossing> {
        let mut path = Vec::with_capacity(self.nodes[index].depth);
        let mut current = Some(index);
        while let Some(i) = current {
            let node = &self.nodes[i];
            if let Some(crossing) = node.crossing() {
                path.push(crossing.clone());
            }
            current = node.parent_index;
        }
        path.reverse();
        path
    }
}
