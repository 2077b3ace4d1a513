//! Roster rules - pure checks deciding whether a team change is legal
//!
//! No I/O happens here. Callers load the event and its current team,
//! run these checks, and only then persist anything.
//!
//! Candidate lists are treated as sets keyed by character id: the order in
//! which characters are proposed never changes the outcome.

mod checker;

pub use checker::{
    check_capacity, check_minimum_after_removal, ensure_same_server, filter_already_members,
    is_member, partition_by_same_server, ServerPartition, MIN_ROSTER_SIZE,
};
