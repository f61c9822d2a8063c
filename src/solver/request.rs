//! In-flight submission tracking and stale-response guarding.
//!
//! Every submission is tagged with a generation number. Changing or clearing
//! the image source bumps the generation, so a response that arrives for an
//! image the user has already moved away from is dropped instead of
//! overwriting the current state. There is no cancellation of an in-flight
//! request; the guard is what keeps late answers harmless.

use crate::solver::client::{SolveOutcome, Solved};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SolveStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct SolveTracker {
    generation: u64,
    status: SolveStatus,
    solved: Option<Solved>,
}

impl SolveTracker {
    pub fn new() -> SolveTracker {
        SolveTracker::default()
    }

    pub fn status(&self) -> SolveStatus {
        self.status.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.status() == SolveStatus::Pending
    }

    pub fn solved(&self) -> Option<&Solved> {
        self.solved.as_ref()
    }

    /// Starts a new submission and returns its generation tag.
    ///
    /// Returns `None` while another submission is pending; the UI disables
    /// the trigger, this is the backstop.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_pending() {
            return None;
        }

        self.generation += 1;
        self.status = SolveStatus::Pending;
        self.solved = None;
        Some(self.generation)
    }

    /// Forgets the current solution and invalidates any in-flight request.
    ///
    /// Called on every image-source change and on reset.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.status = SolveStatus::Idle;
        self.solved = None;
    }

    /// Applies a finished submission.
    ///
    /// Returns `false` when the outcome belongs to a superseded generation,
    /// in which case nothing changes.
    pub fn finish(&mut self, outcome: SolveOutcome) -> bool {
        if outcome.generation != self.generation {
            log::debug!(
                "dropping stale solve response (generation {} vs {})",
                outcome.generation,
                self.generation
            );
            return false;
        }

        match outcome.result {
            Ok(solved) => {
                self.solved = Some(solved);
                self.status = SolveStatus::Succeeded;
            }
            Err(e) => {
                self.solved = None;
                self.status = SolveStatus::Failed(e.to_string());
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::client::SolveError;
    use crate::solver::grid::{GRID_SIZE, Grid};

    fn solved() -> Solved {
        Solved {
            solution: Grid::from_rows(vec![vec![1; GRID_SIZE]; GRID_SIZE]).unwrap(),
            givens: None,
        }
    }

    fn outcome(generation: u64, result: Result<Solved, SolveError>) -> SolveOutcome {
        SolveOutcome { generation, result }
    }

    #[test]
    fn a_full_round_trip_succeeds() {
        let mut tracker = SolveTracker::new();
        assert_eq!(tracker.status(), SolveStatus::Idle);

        let generation = tracker.begin().expect("nothing pending");
        assert!(tracker.is_pending());

        assert!(tracker.finish(outcome(generation, Ok(solved()))));
        assert_eq!(tracker.status(), SolveStatus::Succeeded);
        assert!(tracker.solved().is_some());
    }

    #[test]
    fn only_one_submission_runs_at_a_time() {
        let mut tracker = SolveTracker::new();
        let generation = tracker.begin().unwrap();

        assert!(tracker.begin().is_none());

        tracker.finish(outcome(generation, Ok(solved())));
        assert!(tracker.begin().is_some());
    }

    #[test]
    fn a_failure_clears_the_solution_and_keeps_the_message() {
        let mut tracker = SolveTracker::new();
        let generation = tracker.begin().unwrap();
        tracker.finish(outcome(generation, Ok(solved())));

        let generation = tracker.begin().unwrap();
        assert!(tracker.solved().is_none(), "starting a solve clears the grid");

        let error = SolveError::Service("Could not detect grid".to_string());
        assert!(tracker.finish(outcome(generation, Err(error))));
        assert_eq!(
            tracker.status(),
            SolveStatus::Failed("Could not detect grid".to_string())
        );
        assert!(tracker.solved().is_none());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut tracker = SolveTracker::new();
        let stale = tracker.begin().unwrap();

        // user resets while the request is in flight
        tracker.invalidate();
        assert_eq!(tracker.status(), SolveStatus::Idle);

        assert!(!tracker.finish(outcome(stale, Ok(solved()))));
        assert_eq!(tracker.status(), SolveStatus::Idle);
        assert!(tracker.solved().is_none());
    }

    #[test]
    fn a_newer_submission_supersedes_an_older_one() {
        let mut tracker = SolveTracker::new();
        let first = tracker.begin().unwrap();

        // a new image invalidates, then a second solve starts
        tracker.invalidate();
        let second = tracker.begin().unwrap();

        assert!(!tracker.finish(outcome(first, Ok(solved()))));
        assert!(tracker.solved().is_none());

        assert!(tracker.finish(outcome(second, Ok(solved()))));
        assert!(tracker.solved().is_some());
    }

    #[test]
    fn invalidate_forgets_the_displayed_solution() {
        let mut tracker = SolveTracker::new();
        let generation = tracker.begin().unwrap();
        tracker.finish(outcome(generation, Ok(solved())));
        assert!(tracker.solved().is_some());

        tracker.invalidate();
        assert!(tracker.solved().is_none());
        assert_eq!(tracker.status(), SolveStatus::Idle);
    }
}
