//! Roster invariant checks

use std::collections::HashSet;

use crate::entities::{Character, Event};
use crate::error::DomainError;
use crate::value_objects::CharacterId;

/// A team must keep at least this many characters after a removal
pub const MIN_ROSTER_SIZE: usize = 1;

/// Drop candidates that are already on the team
///
/// Repeated candidate ids collapse to their first occurrence, so the result
/// is disjoint from `current_roster` and free of duplicates. An empty result
/// means there is nothing new to add.
pub fn filter_already_members(
    current_roster: &[Character],
    candidates: impl IntoIterator<Item = Character>,
) -> Vec<Character> {
    let mut seen: HashSet<CharacterId> = current_roster.iter().map(|c| c.id).collect();

    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.id))
        .collect()
}

/// Fail when `current_roster_size + incoming_count` exceeds the event capacity
pub fn check_capacity(
    event: &Event,
    current_roster_size: usize,
    incoming_count: usize,
) -> Result<(), DomainError> {
    let requested = current_roster_size.saturating_add(incoming_count);
    if requested > event.capacity() {
        return Err(DomainError::CapacityExceeded {
            max_players: event.max_players,
            requested,
        });
    }
    Ok(())
}

/// Candidates split by whether they play on the event's server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerPartition {
    /// Candidates hosted on the event's server
    pub valid: Vec<Character>,
    /// Names of candidates from any other server
    pub invalid_names: Vec<String>,
}

impl ServerPartition {
    /// Check if every candidate matched the event's server
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.invalid_names.is_empty()
    }
}

/// Split candidates into same-server characters and the names of the others
pub fn partition_by_same_server(
    event: &Event,
    candidates: impl IntoIterator<Item = Character>,
) -> ServerPartition {
    let mut partition = ServerPartition::default();
    for candidate in candidates {
        if event.is_hosted_on(candidate.server_id) {
            partition.valid.push(candidate);
        } else {
            partition.invalid_names.push(candidate.name);
        }
    }
    partition
}

/// Accept the whole batch only if every candidate shares the event's server
///
/// # Errors
/// `CrossServerCharacter` with the offending names when any candidate is
/// hosted elsewhere. Valid candidates in the same batch are rejected too.
pub fn ensure_same_server(
    event: &Event,
    candidates: impl IntoIterator<Item = Character>,
) -> Result<Vec<Character>, DomainError> {
    let partition = partition_by_same_server(event, candidates);
    if partition.is_clean() {
        Ok(partition.valid)
    } else {
        Err(DomainError::CrossServerCharacter(partition.invalid_names))
    }
}

/// Check if a character is on the team
#[inline]
pub fn is_member(roster: &[Character], character_id: CharacterId) -> bool {
    roster.iter().any(|c| c.id == character_id)
}

/// Team size after removing one member
///
/// Callers reject the removal when the result is below [`MIN_ROSTER_SIZE`].
#[inline]
pub fn check_minimum_after_removal(roster: &[Character]) -> usize {
    roster.len().saturating_sub(1)
}
