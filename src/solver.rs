use std::collections::HashSet;

use tracing::{debug, info, trace, warn};

use crate::board::{Board, Move};
use crate::error::SolveError;
use crate::min_pq::MinPq;

/// Knobs for a [`Solver`] run. The default is an unbounded search without a
/// closed set.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Give up with [`SolveError::SearchAborted`] once this many nodes have
    /// been dequeued across both lanes. Counted per dequeue, so the reported
    /// expansions equal the limit.
    pub max_expansions: Option<usize>,

    /// Skip boards a lane has already expanded. Solutions stay optimal;
    /// only the amount of work changes.
    pub closed_set: bool,
}

#[derive(Debug)]
struct SearchNode {
    board: Board,
    moves: usize,
    previous: Option<usize>,
    via: Option<Move>,
}

/// Frontier key. Ordered by `manhattan + moves`, ties going to the smaller
/// manhattan distance and then to the earlier discovered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    priority: usize,
    manhattan: usize,
    node: usize,
}

impl Entry {
    fn new(node: &SearchNode, index: usize) -> Self {
        let manhattan = node.board.manhattan();
        Self {
            priority: manhattan + node.moves,
            manhattan,
            node: index,
        }
    }
}

/// One A* search. Nodes live in an arena and point at their predecessor by
/// index, so the frontier only carries small keys.
#[derive(Debug)]
struct Lane {
    nodes: Vec<SearchNode>,
    frontier: MinPq<Entry>,
    current: usize,
    closed: Option<HashSet<Board>>,
    exhausted: bool,
}

impl Lane {
    fn new(root: Board, closed_set: bool) -> Self {
        let root = SearchNode {
            board: root,
            moves: 0,
            previous: None,
            via: None,
        };
        let mut frontier = MinPq::new();
        frontier.insert(Entry::new(&root, 0));

        Self {
            nodes: vec![root],
            frontier,
            current: 0,
            closed: closed_set.then(HashSet::new),
            exhausted: false,
        }
    }

    fn current(&self) -> &SearchNode {
        &self.nodes[self.current]
    }

    fn at_goal(&self) -> bool {
        !self.exhausted && self.current().board.is_goal()
    }

    /// Dequeues the minimum node, enqueues its children, and points
    /// `current` at the new minimum. Returns `false` once the frontier runs
    /// dry, which only a closed set can cause.
    fn step(&mut self) -> bool {
        let index = self.frontier.del_min().node;

        let fresh = match self.closed.as_mut() {
            Some(closed) => closed.insert(self.nodes[index].board.clone()),
            None => true,
        };

        if fresh {
            let node = &self.nodes[index];
            let predecessor = node.previous.map(|p| &self.nodes[p].board);
            let closed = self.closed.as_ref();

            let children: Vec<SearchNode> = node
                .board
                .neighbors_with_moves()
                .into_iter()
                .filter(|(_, board)| Some(board) != predecessor)
                .filter(|(_, board)| !closed.is_some_and(|c| c.contains(board)))
                .map(|(via, board)| SearchNode {
                    board,
                    moves: node.moves + 1,
                    previous: Some(index),
                    via: Some(via),
                })
                .collect();

            for child in children {
                let id = self.nodes.len();
                self.frontier.insert(Entry::new(&child, id));
                self.nodes.push(child);
            }
        }

        if self.frontier.is_empty() {
            self.exhausted = true;
            return false;
        }
        self.current = self.frontier.min().node;
        true
    }

    /// Boards and moves from the root to `current`.
    fn path(&self) -> (Vec<Board>, Vec<Move>) {
        let mut boards = Vec::new();
        let mut moves = Vec::new();

        let mut cursor = Some(self.current);
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            boards.push(node.board.clone());
            moves.extend(node.via);
            cursor = node.previous;
        }

        boards.reverse();
        moves.reverse();
        (boards, moves)
    }
}

/// Races A* on a board against A* on its twin.
///
/// Exactly one of the two can reach the goal, so whichever lane gets there
/// first decides solvability. Both lanes advance one expansion per round.
/// All work happens during construction; the accessors only read results.
#[derive(Debug)]
pub struct Solver {
    initial: Board,
    solution: Option<(Vec<Board>, Vec<Move>)>,
    expansions: usize,
}

impl Solver {
    /// Solves `initial` without an expansion budget.
    pub fn new(initial: Board) -> Self {
        match Self::with_config(initial, SolverConfig::default()) {
            Ok(solver) => solver,
            // Only a budget can abort a search.
            Err(e) => unreachable!("{e}"),
        }
    }

    pub fn with_config(initial: Board, config: SolverConfig) -> Result<Self, SolveError> {
        debug!(
            dimension = initial.dimension(),
            manhattan = initial.manhattan(),
            hamming = initial.hamming(),
            ?config,
            "starting search"
        );

        let mut main = Lane::new(initial.clone(), config.closed_set);
        let mut twin = Lane::new(initial.twin(), config.closed_set);
        let mut expansions = 0;

        // Checked before every dequeue, so the limit is never overshot.
        let check_budget = |expansions: usize| match config.max_expansions {
            Some(limit) if expansions >= limit => {
                warn!(expansions, limit, "expansion budget exhausted");
                Err(SolveError::SearchAborted { expansions })
            }
            _ => Ok(()),
        };

        let solvable = loop {
            if main.at_goal() {
                break true;
            }
            if twin.at_goal() || main.exhausted {
                break false;
            }

            check_budget(expansions)?;
            main.step();
            expansions += 1;
            if main.at_goal() {
                continue;
            }

            if !twin.exhausted {
                check_budget(expansions)?;
                twin.step();
                expansions += 1;
            }

            trace!(
                expansions,
                main_moves = main.current().moves,
                main_frontier = main.frontier.len(),
                twin_moves = twin.current().moves,
                twin_frontier = twin.frontier.len(),
                "round complete"
            );
        };

        let solver = Self {
            initial,
            solution: solvable.then(|| main.path()),
            expansions,
        };
        info!(solvable, moves = solver.moves(), expansions, "search finished");

        Ok(solver)
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Length of a shortest solution, or -1 when the board is unsolvable.
    pub fn moves(&self) -> isize {
        match &self.solution {
            Some((_, moves)) => moves.len() as isize,
            None => -1,
        }
    }

    /// Boards of a shortest solution, initial board first and goal last.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_ref().map(|(boards, _)| boards.as_slice())
    }

    /// Directions the blank travels along [`Solver::solution`].
    pub fn directions(&self) -> Option<&[Move]> {
        self.solution.as_ref().map(|(_, moves)| moves.as_slice())
    }

    /// Nodes dequeued across both lanes.
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}
