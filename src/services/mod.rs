pub mod issue_tracker;

pub use issue_tracker::{IssueLookup, IssueTrackerService};
