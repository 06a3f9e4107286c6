/// Core data structures for benchmark comparison results
///
/// This module defines the primary data structures used throughout bench-delta
/// for representing run outcomes, instance identities, and classified changes.

use lazy_static::lazy_static;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Outcome category of a single solve attempt.
///
/// The known variants cover every status the benchmark harness emits today;
/// `Other` carries anything else verbatim so newer status values flow through
/// reporting unchanged. Construction goes through `From<String>`, which maps
/// known strings onto their variants, so an `Other` never holds a known value.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Error,
    Unknown,
    Unbounded,
    UnsatOrUnbounded,
    Unsatisfiable,
    Satisfied,
    AllSolutions,
    OptimalSolution,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Error => "ERROR",
            Status::Unknown => "UNKNOWN",
            Status::Unbounded => "UNBOUNDED",
            Status::UnsatOrUnbounded => "UNSAT_OR_UNBOUNDED",
            Status::Unsatisfiable => "UNSATISFIABLE",
            Status::Satisfied => "SATISFIED",
            Status::AllSolutions => "ALL_SOLUTIONS",
            Status::OptimalSolution => "OPTIMAL_SOLUTION",
            Status::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ERROR" => Status::Error,
            "UNKNOWN" => Status::Unknown,
            "UNBOUNDED" => Status::Unbounded,
            "UNSAT_OR_UNBOUNDED" => Status::UnsatOrUnbounded,
            "UNSATISFIABLE" => Status::Unsatisfiable,
            "SATISFIED" => Status::Satisfied,
            "ALL_SOLUTIONS" => Status::AllSolutions,
            "OPTIMAL_SOLUTION" => Status::OptimalSolution,
            _ => Status::Other(raw),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Column order in status tables is lexicographic on the string form, so
// comparison, equality, and hashing all delegate to the string form to stay
// mutually consistent, Other variants included.
impl Ord for Status {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Status {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Status {}

impl std::hash::Hash for Status {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

/// Identity of a benchmark instance within one configuration's results.
///
/// Not unique across configurations; used to match corresponding runs
/// between the "from" and "to" side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct InstanceKey {
    pub model: String,
    pub data_file: String,
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.model, self.data_file)
    }
}

/// The per-instance values a comparison looks at: one side's run outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub status: Status,
    pub time: f64,
    pub objective: f64,
    pub method: String,
}

/// A runtime difference between two runs of the same instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeChange {
    pub key: InstanceKey,
    pub from_time: f64,
    pub to_time: f64,
}

impl TimeChange {
    /// Relative runtime change; negative means the "to" side got faster.
    pub fn relative_change(&self) -> f64 {
        relative_change(self.from_time, self.to_time)
    }
}

/// An objective-value difference between two runs of the same instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveChange {
    pub key: InstanceKey,
    pub from_obj: f64,
    pub to_obj: f64,
    pub maximize: bool,
}

impl ObjectiveChange {
    pub fn relative_change(&self) -> f64 {
        relative_change(self.from_obj, self.to_obj)
    }

    /// Relative change with the sign flipped for minimization, so that
    /// positive always means the objective improved.
    pub fn signed_relative_change(&self) -> f64 {
        let sign = if self.maximize { 1.0 } else { -1.0 };
        sign * self.relative_change()
    }
}

/// Relative change from `from` to `to`.
///
/// A zero starting value yields signed infinity (any threshold is exceeded)
/// unless both values are zero, which counts as no change. NaN inputs
/// propagate, so unset objectives never register as a change.
pub fn relative_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        if to == 0.0 {
            0.0
        } else if to > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    } else {
        (to - from) / from
    }
}

/// How a status transition reads when comparing two configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Feasibility contradiction between the two sides
    Conflicting,
    /// The "to" side reached a strictly better outcome
    Positive,
    /// Anything else; treated as a potential regression
    Other,
}

impl TransitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionKind::Conflicting => "conflicting",
            TransitionKind::Positive => "positive",
            TransitionKind::Other => "other",
        }
    }
}

lazy_static! {
    /// Transitions where the "to" configuration strictly improved.
    pub static ref POSITIVE_TRANSITIONS: Vec<(Status, Status)> = vec![
        (Status::Error, Status::Satisfied),
        (Status::Error, Status::Unsatisfiable),
        (Status::Error, Status::OptimalSolution),
        (Status::Error, Status::Unknown),
        (Status::Unknown, Status::Satisfied),
        (Status::Unknown, Status::Unsatisfiable),
        (Status::Unknown, Status::OptimalSolution),
        (Status::Satisfied, Status::OptimalSolution),
    ];

    /// Transitions where the two sides contradict each other on feasibility.
    pub static ref CONFLICTING_TRANSITIONS: Vec<(Status, Status)> = vec![
        (Status::Unsatisfiable, Status::Satisfied),
        (Status::Satisfied, Status::Unsatisfiable),
        (Status::Unsatisfiable, Status::OptimalSolution),
        (Status::OptimalSolution, Status::Unsatisfiable),
    ];
}

/// Classify a status transition as conflicting, positive, or other.
pub fn classify_transition(from: &Status, to: &Status) -> TransitionKind {
    let pair = (from.clone(), to.clone());
    if CONFLICTING_TRANSITIONS.contains(&pair) {
        TransitionKind::Conflicting
    } else if POSITIVE_TRANSITIONS.contains(&pair) {
        TransitionKind::Positive
    } else {
        TransitionKind::Other
    }
}

/// Classified differences between two configurations' runs.
///
/// Built incrementally by `compare::compare_configurations` and immutable
/// afterwards. Each instance key lands in at most one of the four
/// containers.
#[derive(Debug, Clone)]
pub struct PerformanceChanges {
    /// Threshold the timing changes were filtered with
    pub time_delta: f64,
    /// Threshold the objective changes were filtered with
    pub obj_delta: f64,
    /// (from_status, to_status) -> instances that made that transition
    pub status_changes: BTreeMap<(Status, Status), Vec<InstanceKey>>,
    pub time_changes: Vec<TimeChange>,
    pub obj_changes: Vec<ObjectiveChange>,
    /// Instances present in "from" but absent in "to"
    pub missing_instances: Vec<InstanceKey>,
}

impl PerformanceChanges {
    pub fn new(time_delta: f64, obj_delta: f64) -> Self {
        PerformanceChanges {
            time_delta,
            obj_delta,
            status_changes: BTreeMap::new(),
            time_changes: Vec::new(),
            obj_changes: Vec::new(),
            missing_instances: Vec::new(),
        }
    }

    /// Total number of instances whose status changed.
    pub fn status_change_count(&self) -> usize {
        self.status_changes.values().map(|keys| keys.len()).sum()
    }

    /// Number of status changes of the given kind.
    pub fn transition_count(&self, kind: TransitionKind) -> usize {
        self.status_changes
            .iter()
            .filter(|((from, to), _)| classify_transition(from, to) == kind)
            .map(|(_, keys)| keys.len())
            .sum()
    }

    /// Timing changes where the "to" side got faster.
    pub fn positive_time_count(&self) -> usize {
        self.time_changes.iter().filter(|c| c.relative_change() < 0.0).count()
    }

    /// Objective changes where the "to" side found a better solution.
    pub fn positive_obj_count(&self) -> usize {
        self.obj_changes.iter().filter(|c| c.signed_relative_change() > 0.0).count()
    }

    /// True when nothing at all differed between the two sides.
    pub fn is_empty(&self) -> bool {
        self.status_changes.is_empty()
            && self.time_changes.is_empty()
            && self.obj_changes.is_empty()
            && self.missing_instances.is_empty()
    }
}
