//! Motion-constrained best-first search over discretized `(position, heading)`
//! states.
//!
//! The search is a hybrid of A* and greedy best-first search. Every node
//! accumulates its true path cost in `g_cost`, but freshly generated nodes are
//! ranked on the frontier by their heuristic alone, which biases expansion
//! towards poses already aligned with the destination.

use crate::error::NavigationError;
use crate::heuristic::{Heuristic, expand};
use crate::planner::{FlightContext, PathStrategy};
use uav_kinematics::{MotionModel, Point, angle_difference, bearing, discretize_heading, normalize_degrees};

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default cap on node expansions per search.
pub const DEFAULT_MAX_EXPANSIONS: usize = 20_000;

/// Index of a node inside the per-search arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One discretized state in the search space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    /// Position of the agent in this state.
    pub position: Point,
    /// Heading in degrees, in `[0, 360)`.
    pub heading: f64,
    /// Steps taken from the start.
    pub g_cost: f64,
    /// Heuristic estimate to the destination.
    pub h_cost: f64,
    /// Frontier priority.
    pub f_cost: f64,
    /// Predecessor on the search tree; `None` for the start node.
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// Discretized key identifying the state this node occupies.
    pub fn state_key(&self) -> StateKey {
        let (x, y) = self.position.discretize();
        StateKey {
            x,
            y,
            heading: discretize_heading(self.heading),
        }
    }
}

/// Position and heading rounded to two decimals, scaled to integers.
///
/// Two nodes represent the same state iff their keys are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    /// x coordinate × 100, rounded.
    pub x: i64,
    /// y coordinate × 100, rounded.
    pub y: i64,
    /// Heading × 100, rounded.
    pub heading: i64,
}

/// Append-only storage for every node allocated during one search.
///
/// Dropping the arena releases all of them, whichever way the search ends.
#[derive(Debug, Default)]
struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    fn alloc(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Walks parent links from `goal` to the root, then appends the exact
    /// destination. Returned in start-to-destination order.
    fn reconstruct_path(&self, goal: NodeId, destination: Point) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cursor = Some(goal);
        while let Some(id) = cursor {
            let node = self.get(id);
            path.push(node.position);
            cursor = node.parent;
        }
        path.reverse();
        path.push(destination);
        path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StateFlag {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f_cost: f64,
    seq: u64,
    id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

// Reversed on cost so `BinaryHeap` pops the cheapest entry. Equal costs pop
// in insertion order.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set ordered by ascending `f_cost`, plus the registry of states seen so
/// far.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    registry: HashMap<StateKey, StateFlag>,
    next_seq: u64,
}

impl Frontier {
    /// Enqueues `id` unless its state is already open. Closed states are
    /// enqueued again with their new costs.
    fn offer(&mut self, id: NodeId, node: &SearchNode) -> bool {
        let key = node.state_key();
        if self.registry.get(&key) == Some(&StateFlag::Open) {
            return false;
        }
        self.registry.insert(key, StateFlag::Open);
        self.heap.push(FrontierEntry {
            f_cost: node.f_cost,
            seq: self.next_seq,
            id,
        });
        self.next_seq += 1;
        true
    }

    fn pop(&mut self, arena: &NodeArena) -> Option<NodeId> {
        let entry = self.heap.pop()?;
        self.registry
            .insert(arena.get(entry.id).state_key(), StateFlag::Closed);
        Some(entry.id)
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A node passed the goal test.
    GoalReached,
    /// Every enqueued state was expanded without passing the goal test.
    FrontierExhausted,
    /// The expansion budget ran out first.
    BudgetExhausted,
}

/// Result of a search with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Waypoints from start to destination; empty when no path was found.
    pub path: Vec<Point>,
    /// Nodes popped from the frontier and expanded.
    pub nodes_expanded: usize,
    /// Nodes allocated over the whole search, enqueued or not.
    pub nodes_allocated: usize,
    /// Steps from the start to the accepted node.
    pub total_cost: Option<f64>,
    /// Why the search stopped.
    pub termination: Termination,
}

impl SearchOutcome {
    fn success(path: Vec<Point>, total_cost: f64, nodes_expanded: usize, nodes_allocated: usize) -> Self {
        Self {
            path,
            nodes_expanded,
            nodes_allocated,
            total_cost: Some(total_cost),
            termination: Termination::GoalReached,
        }
    }

    fn failure(termination: Termination, nodes_expanded: usize, nodes_allocated: usize) -> Self {
        Self {
            path: Vec::new(),
            nodes_expanded,
            nodes_allocated,
            total_cost: None,
            termination,
        }
    }

    /// Returns true if a path was found.
    pub fn is_success(&self) -> bool {
        self.termination == Termination::GoalReached
    }

    /// Returns the path, empty on failure.
    pub fn into_path(self) -> Vec<Point> {
        self.path
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total_cost {
            Some(cost) => write!(
                f,
                "SearchOutcome {{ success: true, path_length: {}, total_cost: {}, nodes_expanded: {}, nodes_allocated: {} }}",
                self.path.len(),
                cost,
                self.nodes_expanded,
                self.nodes_allocated
            ),
            None => write!(
                f,
                "SearchOutcome {{ success: false, termination: {:?}, nodes_expanded: {}, nodes_allocated: {} }}",
                self.termination, self.nodes_expanded, self.nodes_allocated
            ),
        }
    }
}

/// Tunables for [`GraphSearch`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SearchConfig {
    /// Cost-to-go estimate for generated states.
    pub heuristic: Heuristic,
    /// Upper bound on expansions; the open plane is otherwise unbounded.
    pub max_expansions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

/// Bounded-turn graph search planner.
#[derive(Debug, Clone, Default)]
pub struct GraphSearch {
    config: SearchConfig,
}

impl GraphSearch {
    /// Creates a planner from `config`.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::InvalidConfig` if the expansion budget is zero
    /// or the angle weight is negative or not finite.
    pub fn new(config: SearchConfig) -> Result<Self, NavigationError> {
        if config.max_expansions == 0 {
            return Err(NavigationError::InvalidConfig("max_expansions must be positive"));
        }
        if let Heuristic::AngleWeighted { weight } = config.heuristic {
            if !weight.is_finite() || weight < 0.0 {
                return Err(NavigationError::InvalidConfig(
                    "angle weight must be finite and non-negative",
                ));
            }
        }
        Ok(Self { config })
    }

    /// Returns the planner configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Plans from the context's pose to `destination`, returning search metadata.
    ///
    /// A context whose motion parameters are out of range yields an empty path.
    pub fn calculate_detailed(&self, context: &dyn FlightContext, destination: Point) -> SearchOutcome {
        match context.motion_model() {
            Ok(model) => self.search(&model, context.position(), context.heading(), destination),
            Err(err) => {
                warn!(%err, "Rejecting flight context, returning empty path");
                SearchOutcome::failure(Termination::FrontierExhausted, 0, 0)
            }
        }
    }

    /// Runs the search from `start` with initial `heading`.
    pub fn search(&self, model: &MotionModel, start: Point, heading: f64, destination: Point) -> SearchOutcome {
        let heuristic = self.config.heuristic;
        let step_size = model.step_size();
        debug!(%start, %destination, heading, %model, "Starting graph search");

        let mut arena = NodeArena::default();
        let mut frontier = Frontier::default();
        let mut nodes_expanded = 0usize;

        let start_heading = normalize_degrees(heading);
        let start_h = heuristic.estimate(&start, start_heading, &destination, step_size);
        let root = SearchNode {
            position: start,
            heading: start_heading,
            g_cost: 0.0,
            h_cost: start_h,
            f_cost: start_h,
            parent: None,
        };
        let root_id = arena.alloc(root);
        frontier.offer(root_id, &root);

        while let Some(current) = frontier.pop(&arena) {
            let node = *arena.get(current);

            if reaches_goal(&node, &destination, model) {
                let path = arena.reconstruct_path(current, destination);
                debug!(
                    nodes_expanded,
                    nodes_allocated = arena.len(),
                    path_len = path.len(),
                    "Graph search reached destination"
                );
                return SearchOutcome::success(path, node.g_cost, nodes_expanded, arena.len());
            }

            if nodes_expanded >= self.config.max_expansions {
                warn!(
                    nodes_expanded,
                    nodes_allocated = arena.len(),
                    "Expansion budget exhausted before reaching destination"
                );
                return SearchOutcome::failure(Termination::BudgetExhausted, nodes_expanded, arena.len());
            }

            nodes_expanded += 1;
            trace!(
                x = node.position.x,
                y = node.position.y,
                heading = node.heading,
                f = node.f_cost,
                "Expanding node"
            );

            for successor in expand(model, &heuristic, node.position, node.heading, destination) {
                let neighbor = SearchNode {
                    position: successor.position,
                    heading: successor.heading,
                    g_cost: node.g_cost + 1.0,
                    h_cost: successor.h_cost,
                    f_cost: successor.h_cost,
                    parent: Some(current),
                };
                let id = arena.alloc(neighbor);
                frontier.offer(id, &neighbor);
            }
        }

        debug!(
            nodes_expanded,
            nodes_allocated = arena.len(),
            "Frontier exhausted without reaching destination"
        );
        SearchOutcome::failure(Termination::FrontierExhausted, nodes_expanded, arena.len())
    }
}

impl PathStrategy for GraphSearch {
    fn calculate(&self, context: &dyn FlightContext, destination: Point) -> Vec<Point> {
        self.calculate_detailed(context, destination).into_path()
    }
}

/// Within one step of the destination and turned towards it by less than the
/// maximum turn angle.
fn reaches_goal(node: &SearchNode, destination: &Point, model: &MotionModel) -> bool {
    if node.position.distance(destination) >= model.step_size() {
        return false;
    }
    let target_heading = bearing(&node.position, destination);
    angle_difference(node.heading, target_heading) < model.max_turn_angle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    const EPSILON: f64 = 1e-9;

    struct Pose {
        position: Point,
        heading: f64,
        max_turn_angle: f64,
        step_size: f64,
    }

    impl FlightContext for Pose {
        fn position(&self) -> Point {
            self.position
        }
        fn heading(&self) -> f64 {
            self.heading
        }
        fn max_turn_angle(&self) -> f64 {
            self.max_turn_angle
        }
        fn step_size(&self) -> f64 {
            self.step_size
        }
    }

    fn pose(x: f64, y: f64, heading: f64, max_turn_angle: f64, step_size: f64) -> Pose {
        Pose {
            position: Point::new(x, y),
            heading,
            max_turn_angle,
            step_size,
        }
    }

    fn planner(max_expansions: usize) -> GraphSearch {
        GraphSearch::new(SearchConfig {
            max_expansions,
            ..SearchConfig::default()
        })
        .unwrap()
    }

    fn assert_valid_path(path: &[Point], context: &Pose, destination: Point) {
        assert!(path.len() >= 2, "Path should contain start and destination");
        assert_eq!(path[0], context.position, "Path start mismatch");
        let last = path[path.len() - 1];
        assert_eq!(last.x, destination.x, "Last waypoint must be the exact destination");
        assert_eq!(last.y, destination.y, "Last waypoint must be the exact destination");
        for pair in path[..path.len() - 1].windows(2) {
            let d = pair[0].distance(&pair[1]);
            assert!(
                (d - context.step_size).abs() < 1e-6,
                "Consecutive waypoints should be one step apart, got {}",
                d
            );
        }
        let approach = path[path.len() - 2];
        assert!(
            approach.distance(&destination) < context.step_size,
            "Second-to-last waypoint should be within one step of destination"
        );
    }

    #[test]
    fn test_straight_line_path() {
        let context = pose(0.0, 0.0, 0.0, 10.0, 1.0);
        let destination = Point::new(10.0, 0.0);
        let path = planner(DEFAULT_MAX_EXPANSIONS).calculate(&context, destination);

        assert_eq!(path.len(), 12, "Ten steps east, then the destination itself");
        for (i, p) in path[..11].iter().enumerate() {
            assert_eq!(*p, Point::new(i as f64, 0.0));
        }
        assert_valid_path(&path, &context, destination);
    }

    #[test]
    fn test_diagonal_destination_requires_turning() {
        let context = pose(0.0, 0.0, 0.0, 30.0, 1.0);
        let destination = Point::new(10.0, 10.0);
        let outcome = planner(DEFAULT_MAX_EXPANSIONS).calculate_detailed(&context, destination);

        assert!(outcome.is_success(), "Path should be found: {}", outcome);
        assert_valid_path(&outcome.path, &context, destination);
        assert_eq!(
            outcome.total_cost,
            Some((outcome.path.len() - 2) as f64),
            "Total cost counts the steps taken"
        );
    }

    #[test]
    fn test_start_already_at_goal() {
        let context = pose(0.0, 0.0, 0.0, 10.0, 1.0);
        let destination = Point::new(0.5, 0.0);
        let outcome = planner(DEFAULT_MAX_EXPANSIONS).calculate_detailed(&context, destination);

        assert!(outcome.is_success());
        assert_eq!(outcome.path, vec![Point::new(0.0, 0.0), destination]);
        assert_eq!(outcome.nodes_expanded, 0);
        assert_eq!(outcome.nodes_allocated, 1);
        assert_eq!(outcome.total_cost, Some(0.0));
    }

    #[test]
    fn test_start_near_goal_but_misaligned_keeps_searching() {
        // Destination is behind the agent: within one step, but 180 degrees off.
        let context = pose(0.0, 0.0, 0.0, 45.0, 1.0);
        let destination = Point::new(-0.5, 0.0);
        let outcome = planner(DEFAULT_MAX_EXPANSIONS).calculate_detailed(&context, destination);

        assert!(outcome.nodes_expanded > 0, "Start node must not pass the goal test");
        if outcome.is_success() {
            assert_valid_path(&outcome.path, &context, destination);
            assert!(outcome.path.len() > 2);
        }
    }

    #[test]
    fn test_unreachable_with_zero_turn() {
        let context = pose(0.0, 0.0, 0.0, 0.0, 1.0);
        let destination = Point::new(0.0, 100.0);
        let outcome = planner(5_000).calculate_detailed(&context, destination);

        assert!(!outcome.is_success());
        assert!(outcome.path.is_empty(), "No path should be returned");
        assert_eq!(outcome.termination, Termination::BudgetExhausted);
        assert_eq!(outcome.nodes_expanded, 5_000);
    }

    #[test]
    fn test_zero_turn_never_passes_goal_test() {
        // Strict `<` against a zero turn angle: even a dead-ahead destination is refused.
        let context = pose(0.0, 0.0, 0.0, 0.0, 1.0);
        let path = planner(200).calculate(&context, Point::new(5.0, 0.0));
        assert!(path.is_empty());
    }

    #[test]
    fn test_no_leaked_nodes() {
        let context = pose(0.0, 0.0, 90.0, 20.0, 1.0);
        let destination = Point::new(8.0, -3.0);
        let model = context.motion_model().unwrap();
        let outcome = planner(DEFAULT_MAX_EXPANSIONS).calculate_detailed(&context, destination);

        assert!(outcome.is_success(), "Path should be found: {}", outcome);
        assert_eq!(
            outcome.nodes_allocated,
            1 + outcome.nodes_expanded * model.branching_factor(),
            "Every generated node, enqueued or discarded, is owned by the arena"
        );

        let failed = planner(50).calculate_detailed(&pose(0.0, 0.0, 0.0, 0.0, 1.0), Point::new(0.0, 9.0));
        assert_eq!(failed.nodes_allocated, 1 + failed.nodes_expanded);
    }

    #[test]
    fn test_invalid_context_returns_empty_path() {
        let context = pose(0.0, 0.0, 0.0, 10.0, 0.0);
        let outcome = planner(DEFAULT_MAX_EXPANSIONS).calculate_detailed(&context, Point::new(3.0, 0.0));
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.nodes_allocated, 0);
    }

    #[test]
    fn test_distance_heuristic_finds_path() {
        let search = GraphSearch::new(SearchConfig {
            heuristic: Heuristic::Distance,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        })
        .unwrap();
        let context = pose(0.0, 0.0, 0.0, 10.0, 1.0);
        let destination = Point::new(6.0, 0.0);
        let path = search.calculate(&context, destination);
        assert_valid_path(&path, &context, destination);
    }

    #[test]
    fn test_heading_is_normalized_at_start() {
        let context = pose(0.0, 0.0, 360.0, 10.0, 1.0);
        let destination = Point::new(0.5, 0.0);
        let path = planner(DEFAULT_MAX_EXPANSIONS).calculate(&context, destination);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_random_destinations_terminate_with_valid_paths() {
        let mut rng = StdRng::seed_from_u64(7);
        let search = planner(3_000);
        for _ in 0..10 {
            let context = pose(
                rng.random_range(-5.0..5.0),
                rng.random_range(-5.0..5.0),
                rng.random_range(0.0..360.0),
                rng.random_range(15.0..45.0),
                rng.random_range(0.5..1.5),
            );
            let destination = Point::new(rng.random_range(-15.0..15.0), rng.random_range(-15.0..15.0));
            let outcome = search.calculate_detailed(&context, destination);
            if outcome.is_success() {
                assert_valid_path(&outcome.path, &context, destination);
            } else {
                assert!(outcome.path.is_empty());
                assert_ne!(outcome.termination, Termination::GoalReached);
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let zero_budget = GraphSearch::new(SearchConfig {
            max_expansions: 0,
            ..SearchConfig::default()
        });
        assert!(matches!(zero_budget, Err(NavigationError::InvalidConfig(_))));

        let negative_weight = GraphSearch::new(SearchConfig {
            heuristic: Heuristic::AngleWeighted { weight: -0.1 },
            ..SearchConfig::default()
        });
        assert!(matches!(negative_weight, Err(NavigationError::InvalidConfig(_))));
    }

    #[test]
    fn test_state_key_discretization() {
        let a = SearchNode {
            position: Point::new(1.004, 2.0),
            heading: 45.001,
            g_cost: 0.0,
            h_cost: 0.0,
            f_cost: 0.0,
            parent: None,
        };
        let b = SearchNode {
            position: Point::new(1.0, 2.001),
            heading: 45.0,
            g_cost: 3.0,
            ..a
        };
        let c = SearchNode { heading: 45.01, ..a };
        assert_eq!(a.state_key(), b.state_key(), "Costs do not affect state identity");
        assert_ne!(a.state_key(), c.state_key());
        assert_eq!(a.state_key(), StateKey { x: 100, y: 200, heading: 4500 });
    }

    #[test]
    fn test_frontier_orders_by_cost_then_insertion() {
        let mut arena = NodeArena::default();
        let mut frontier = Frontier::default();
        let base = SearchNode {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            g_cost: 0.0,
            h_cost: 0.0,
            f_cost: 5.0,
            parent: None,
        };
        let costs = [(5.0, 0.0), (2.0, 1.0), (5.0, 2.0), (1.0, 3.0)];
        let ids: Vec<NodeId> = costs
            .iter()
            .map(|&(f_cost, x)| {
                let node = SearchNode {
                    position: Point::new(x, 0.0),
                    f_cost,
                    ..base
                };
                let id = arena.alloc(node);
                assert!(frontier.offer(id, &node));
                id
            })
            .collect();

        let order: Vec<NodeId> = std::iter::from_fn(|| frontier.pop(&arena)).collect();
        assert_eq!(order, vec![ids[3], ids[1], ids[0], ids[2]]);
    }

    #[test]
    fn test_frontier_suppresses_open_duplicates_but_reopens_closed() {
        let mut arena = NodeArena::default();
        let mut frontier = Frontier::default();
        let node = SearchNode {
            position: Point::new(1.0, 1.0),
            heading: 90.0,
            g_cost: 1.0,
            h_cost: 2.0,
            f_cost: 2.0,
            parent: None,
        };
        let first = arena.alloc(node);
        let duplicate = arena.alloc(SearchNode { g_cost: 4.0, ..node });

        assert!(frontier.offer(first, &node));
        assert!(!frontier.offer(duplicate, arena.get(duplicate)), "Open state is not enqueued twice");
        assert_eq!(arena.len(), 2, "Discarded duplicate stays tracked by the arena");

        assert_eq!(frontier.pop(&arena), Some(first));
        assert!(frontier.offer(duplicate, arena.get(duplicate)), "Closed state is enqueued again");
        assert_eq!(frontier.pop(&arena), Some(duplicate));
        assert_eq!(frontier.pop(&arena), None);
    }

    #[test]
    fn test_reconstruct_path_appends_exact_destination() {
        let mut arena = NodeArena::default();
        let root = SearchNode {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            g_cost: 0.0,
            h_cost: 0.0,
            f_cost: 0.0,
            parent: None,
        };
        let root_id = arena.alloc(root);
        let mid = arena.alloc(SearchNode {
            position: Point::new(1.0, 0.0),
            parent: Some(root_id),
            ..root
        });
        let tip = arena.alloc(SearchNode {
            position: Point::new(2.0, 0.0),
            parent: Some(mid),
            ..root
        });
        let destination = Point::new(2.3, 0.4);
        let path = arena.reconstruct_path(tip, destination);
        assert_eq!(
            path,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0), destination]
        );
        assert_eq!(path[3].x, 2.3);
    }

    #[test]
    fn test_goal_test_requires_alignment() {
        let model = MotionModel::new(20.0, 1.0).unwrap();
        let node = SearchNode {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            g_cost: 0.0,
            h_cost: 0.0,
            f_cost: 0.0,
            parent: None,
        };
        assert!(reaches_goal(&node, &Point::new(0.9, 0.1), &model));
        assert!(!reaches_goal(&node, &Point::new(1.0, 0.0), &model), "Exactly one step away is outside");
        assert!(!reaches_goal(&node, &Point::new(0.0, 0.5), &model), "90 degrees off is misaligned");
        assert!(reaches_goal(&SearchNode { heading: 80.0, ..node }, &Point::new(0.0, 0.5), &model));
    }

    #[test]
    fn test_search_outcome_display() {
        let context = pose(0.0, 0.0, 0.0, 10.0, 1.0);
        let outcome = planner(DEFAULT_MAX_EXPANSIONS).calculate_detailed(&context, Point::new(3.0, 0.0));
        let display = format!("{}", outcome);
        assert!(display.contains("success: true"));
        assert!(display.contains("nodes_expanded"));

        let failed = planner(10).calculate_detailed(&pose(0.0, 0.0, 0.0, 0.0, 1.0), Point::new(0.0, 5.0));
        let display = format!("{}", failed);
        assert!(display.contains("success: false"));
        assert!(display.contains("BudgetExhausted"));
    }

    #[test]
    fn test_outcome_path_within_tolerance_of_step() {
        let context = pose(2.0, -1.0, 270.0, 25.0, 0.75);
        let destination = Point::new(-4.0, 3.0);
        let path = planner(DEFAULT_MAX_EXPANSIONS).calculate(&context, destination);
        assert!(!path.is_empty(), "Path should be found");
        assert_valid_path(&path, &context, destination);
        assert!((path[0].x - 2.0).abs() < EPSILON);
    }
}
