//! In-memory implementation of the event, character, and roster repositories

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::{info, instrument, warn};

use dofus_core::entities::{
    Breed, Character, Comment, Event, EventComment, EventDetails, NewEvent, Server, Tag,
    TeamMember, UserProfile,
};
use dofus_core::error::DomainError;
use dofus_core::roster::MIN_ROSTER_SIZE;
use dofus_core::traits::{CharacterRepository, EventRepository, RepoResult, RosterRepository};
use dofus_core::value_objects::{BreedId, CharacterId, CommentId, EventId, ServerId, TagId, UserId};

use crate::repositories::unknown_reference;

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    users: BTreeMap<UserId, UserProfile>,
    servers: BTreeMap<ServerId, Server>,
    tags: BTreeMap<TagId, Tag>,
    breeds: BTreeMap<BreedId, Breed>,
    characters: BTreeMap<CharacterId, Character>,
    events: BTreeMap<EventId, Event>,
    /// Team members per event, in join order
    teams: BTreeMap<EventId, Vec<CharacterId>>,
    comments: Vec<Comment>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn event(&self, id: EventId) -> RepoResult<&Event> {
        self.events.get(&id).ok_or(DomainError::EventNotFound(id))
    }

    fn team(&self, id: EventId) -> &[CharacterId] {
        self.teams.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    fn profile(&self, id: UserId) -> RepoResult<UserProfile> {
        self.users
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::InternalError(format!("dangling user reference {id}")))
    }

    fn team_member(&self, id: CharacterId) -> RepoResult<TeamMember> {
        let character = self
            .characters
            .get(&id)
            .cloned()
            .ok_or(DomainError::CharacterNotFound(id))?;
        let server = self.servers.get(&character.server_id).cloned().ok_or_else(|| {
            DomainError::InternalError(format!("dangling server reference {}", character.server_id))
        })?;
        let breed = self.breeds.get(&character.breed_id).cloned().ok_or_else(|| {
            DomainError::InternalError(format!("dangling breed reference {}", character.breed_id))
        })?;
        let owner = self.profile(character.user_id)?;

        Ok(TeamMember {
            character,
            server,
            breed,
            owner,
        })
    }

    fn details(&self, event: &Event) -> RepoResult<EventDetails> {
        let tag = self.tags.get(&event.tag_id).cloned().ok_or_else(|| {
            DomainError::InternalError(format!("dangling tag reference {}", event.tag_id))
        })?;
        let server = self.servers.get(&event.server_id).cloned().ok_or_else(|| {
            DomainError::InternalError(format!("dangling server reference {}", event.server_id))
        })?;
        let organizer = self.profile(event.user_id)?;

        let team = self
            .team(event.id)
            .iter()
            .map(|id| self.team_member(*id))
            .collect::<RepoResult<Vec<_>>>()?;

        let comments = self
            .comments
            .iter()
            .filter(|c| c.event_id == event.id)
            .map(|c| {
                Ok(EventComment {
                    comment: c.clone(),
                    author: self.profile(c.user_id)?,
                })
            })
            .collect::<RepoResult<Vec<_>>>()?;

        Ok(EventDetails {
            event: event.clone(),
            tag,
            server,
            organizer,
            team,
            comments,
        })
    }

    fn events_by_date(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.values().collect();
        events.sort_by_key(|e| (e.date, e.id));
        events
    }
}

/// Repository implementation backed by process memory
///
/// Implements [`EventRepository`], [`CharacterRepository`], and
/// [`RosterRepository`] over one shared state guarded by a single mutex, so
/// every guarded roster mutation is atomic. Reference data (users, servers,
/// tags, breeds, characters, comments) is seeded through the `insert_*`
/// helpers. Identifiers come from one counter shared by all tables.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user and return its public profile
    pub fn insert_user(&self, username: &str) -> UserProfile {
        let mut state = self.state.lock();
        let profile = UserProfile::new(UserId::new(state.next_id()), username.to_string());
        state.users.insert(profile.id, profile.clone());
        profile
    }

    /// Register a game server
    pub fn insert_server(&self, name: &str, mono_account: bool) -> Server {
        let mut state = self.state.lock();
        let server = Server {
            id: ServerId::new(state.next_id()),
            name: name.to_string(),
            mono_account,
        };
        state.servers.insert(server.id, server.clone());
        server
    }

    /// Register an event tag
    pub fn insert_tag(&self, name: &str, color: &str) -> Tag {
        let mut state = self.state.lock();
        let tag = Tag {
            id: TagId::new(state.next_id()),
            name: name.to_string(),
            color: color.to_string(),
        };
        state.tags.insert(tag.id, tag.clone());
        tag
    }

    /// Register a character breed
    pub fn insert_breed(&self, name: &str) -> Breed {
        let mut state = self.state.lock();
        let breed = Breed {
            id: BreedId::new(state.next_id()),
            name: name.to_string(),
            description: None,
        };
        state.breeds.insert(breed.id, breed.clone());
        breed
    }

    /// Register a character owned by `user_id`
    pub fn insert_character(
        &self,
        name: &str,
        user_id: UserId,
        server_id: ServerId,
        breed_id: BreedId,
    ) -> Character {
        let mut state = self.state.lock();
        let character = Character::new(
            CharacterId::new(state.next_id()),
            name.to_string(),
            user_id,
            server_id,
            breed_id,
        );
        state.characters.insert(character.id, character.clone());
        character
    }

    /// Post a comment on an event
    pub fn insert_comment(&self, event_id: EventId, user_id: UserId, message: &str) -> Comment {
        let mut state = self.state.lock();
        let now = Utc::now();
        let comment = Comment {
            id: CommentId::new(state.next_id()),
            event_id,
            user_id,
            message: message.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.comments.push(comment.clone());
        comment
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        Ok(self.state.lock().events.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let state = self.state.lock();
        Ok(state.events_by_date().into_iter().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find_details(&self, id: EventId) -> RepoResult<Option<EventDetails>> {
        let state = self.state.lock();
        match state.events.get(&id) {
            Some(event) => state.details(event).map(Some),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_all_details(&self) -> RepoResult<Vec<EventDetails>> {
        let state = self.state.lock();
        state
            .events_by_date()
            .into_iter()
            .map(|event| state.details(event))
            .collect()
    }

    #[instrument(skip(self, event), fields(title = %event.title))]
    async fn create(&self, event: &NewEvent, team: &[CharacterId]) -> RepoResult<Event> {
        let mut state = self.state.lock();

        if !state.users.contains_key(&event.user_id)
            || !state.servers.contains_key(&event.server_id)
            || !state.tags.contains_key(&event.tag_id)
            || team.iter().any(|id| !state.characters.contains_key(id))
        {
            return Err(unknown_reference());
        }

        let mut seen = HashSet::new();
        let members: Vec<CharacterId> = team
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let event = event.clone().into_event(EventId::new(state.next_id()));
        state.events.insert(event.id, event.clone());
        state.teams.insert(event.id, members);

        info!(event_id = %event.id, "Event created");
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EventId) -> RepoResult<()> {
        let mut state = self.state.lock();
        if state.events.remove(&id).is_none() {
            return Err(DomainError::EventNotFound(id));
        }
        state.teams.remove(&id);
        state.comments.retain(|c| c.event_id != id);
        Ok(())
    }
}

#[async_trait]
impl CharacterRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CharacterId) -> RepoResult<Option<Character>> {
        Ok(self.state.lock().characters.get(&id).cloned())
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[CharacterId]) -> RepoResult<Vec<Character>> {
        let state = self.state.lock();
        let mut seen = HashSet::new();
        Ok(ids
            .iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| state.characters.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl RosterRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_members(&self, event_id: EventId) -> RepoResult<Vec<Character>> {
        let state = self.state.lock();
        Ok(state
            .team(event_id)
            .iter()
            .filter_map(|id| state.characters.get(id).cloned())
            .collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, event_id: EventId) -> RepoResult<usize> {
        Ok(self.state.lock().team(event_id).len())
    }

    #[instrument(skip(self), fields(count = character_ids.len()))]
    async fn insert_within_capacity(
        &self,
        event_id: EventId,
        character_ids: &[CharacterId],
        max_players: i32,
    ) -> RepoResult<u64> {
        let mut state = self.state.lock();
        state.event(event_id)?;

        if character_ids.iter().any(|id| !state.characters.contains_key(id)) {
            return Err(unknown_reference());
        }

        let current = state.team(event_id);
        let mut seen: HashSet<CharacterId> = current.iter().copied().collect();
        let fresh: Vec<CharacterId> = character_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let requested = current.len() + fresh.len();
        if requested > usize::try_from(max_players).unwrap_or(0) {
            warn!(%event_id, requested, max_players, "Team capacity re-check failed");
            return Err(DomainError::CapacityExceeded {
                max_players,
                requested,
            });
        }

        let inserted = fresh.len() as u64;
        state.teams.entry(event_id).or_default().extend(fresh);

        info!(%event_id, inserted, "Characters added to team");
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn delete_keeping_one(
        &self,
        event_id: EventId,
        character_id: CharacterId,
    ) -> RepoResult<()> {
        let mut state = self.state.lock();
        state.event(event_id)?;

        let team = state.team(event_id);
        if !team.contains(&character_id) {
            return Err(DomainError::NotInRoster);
        }
        if team.len().saturating_sub(1) < MIN_ROSTER_SIZE {
            warn!(%event_id, %character_id, "Refusing to remove the last team member");
            return Err(DomainError::RosterWouldBeEmpty);
        }

        if let Some(team) = state.teams.get_mut(&event_id) {
            team.retain(|id| *id != character_id);
        }

        info!(%event_id, %character_id, "Character removed from team");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    struct Fixture {
        store: InMemoryStore,
        organizer: UserProfile,
        server: Server,
        other_server: Server,
        tag: Tag,
        breed: Breed,
    }

    impl Fixture {
        fn new() -> Self {
            let store = InMemoryStore::new();
            let organizer = store.insert_user("organizer");
            let server = store.insert_server("Ilyzaelle", false);
            let other_server = store.insert_server("Draconiros", true);
            let tag = store.insert_tag("Dungeon", "#aa0000");
            let breed = store.insert_breed("Eniripsa");
            Self {
                store,
                organizer,
                server,
                other_server,
                tag,
                breed,
            }
        }

        fn character(&self, name: &str) -> Character {
            self.store
                .insert_character(name, self.organizer.id, self.server.id, self.breed.id)
        }

        fn new_event(&self, max_players: i32) -> NewEvent {
            NewEvent::new(
                "Bworker".to_string(),
                Utc::now(),
                max_players,
                self.organizer.id,
                self.server.id,
                self.tag.id,
            )
        }

        async fn event_with(&self, max_players: i32, team: &[CharacterId]) -> Event {
            self.store
                .create(&self.new_event(max_players), team)
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn test_create_and_find_details() {
        let fx = Fixture::new();
        let a = fx.character("Alpha");
        let event = fx.event_with(4, &[a.id, a.id]).await;
        fx.store.insert_comment(event.id, fx.organizer.id, "See you there");

        let details = fx.store.find_details(event.id).await.unwrap().unwrap();
        assert_eq!(details.event, event);
        assert_eq!(details.tag, fx.tag);
        assert_eq!(details.server, fx.server);
        assert_eq!(details.organizer, fx.organizer);
        assert_eq!(details.team_size(), 1);
        assert_eq!(details.team[0].breed, fx.breed);
        assert_eq!(details.team[0].owner, fx.organizer);
        assert_eq!(details.comments.len(), 1);
        assert_eq!(details.comments[0].author.username, "organizer");
    }

    #[tokio::test]
    async fn test_find_missing_event_is_none() {
        let fx = Fixture::new();
        let id = EventId::new(999);
        assert!(EventRepository::find_by_id(&fx.store, id).await.unwrap().is_none());
        assert!(fx.store.find_details(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_date() {
        let fx = Fixture::new();
        let a = fx.character("Alpha");

        let mut later = fx.new_event(2);
        later.date = Utc::now() + chrono::Duration::days(2);
        let later = fx.store.create(&later, &[a.id]).await.unwrap();
        let sooner = fx.event_with(2, &[a.id]).await;

        let all = fx.store.find_all().await.unwrap();
        let ids: Vec<EventId> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![sooner.id, later.id]);

        let details = fx.store.find_all_details().await.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].event.id, sooner.id);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_references() {
        let fx = Fixture::new();
        let mut event = fx.new_event(2);
        event.tag_id = TagId::new(12345);

        let err = fx.store.create(&event, &[]).await.unwrap_err();
        assert!(err.is_validation());

        let err = fx
            .store
            .create(&fx.new_event(2), &[CharacterId::new(4242)])
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_delete_cascades_team_and_comments() {
        let fx = Fixture::new();
        let a = fx.character("Alpha");
        let event = fx.event_with(2, &[a.id]).await;
        fx.store.insert_comment(event.id, fx.organizer.id, "hi");

        fx.store.delete(event.id).await.unwrap();

        assert_eq!(fx.store.count(event.id).await.unwrap(), 0);
        assert!(fx.store.find_details(event.id).await.unwrap().is_none());
        assert!(matches!(
            fx.store.delete(event.id).await,
            Err(DomainError::EventNotFound(_))
        ));
        // The character itself survives
        assert!(CharacterRepository::find_by_id(&fx.store, a.id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_unknown_and_repeats() {
        let fx = Fixture::new();
        let a = fx.character("Alpha");
        let b = fx.character("Beta");

        let found = fx
            .store
            .find_by_ids(&[b.id, CharacterId::new(777), a.id, b.id])
            .await
            .unwrap();
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alpha"]);
    }

    #[tokio::test]
    async fn test_insert_within_capacity() {
        let fx = Fixture::new();
        let a = fx.character("Alpha");
        let b = fx.character("Beta");
        let c = fx.character("Gamma");
        let event = fx.event_with(2, &[a.id]).await;

        // Existing members are ignored
        let inserted = fx
            .store
            .insert_within_capacity(event.id, &[a.id, b.id, b.id], 2)
            .await
            .unwrap();
        assert_eq!(inserted, 1);

        let err = fx
            .store
            .insert_within_capacity(event.id, &[c.id], 2)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::CapacityExceeded {
                max_players: 2,
                requested: 3
            }
        );

        let members: Vec<CharacterId> = fx
            .store
            .find_members(event.id)
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(members, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn test_insert_into_missing_event() {
        let fx = Fixture::new();
        let a = fx.character("Alpha");
        let err = fx
            .store
            .insert_within_capacity(EventId::new(31337), &[a.id], 4)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::EventNotFound(_)));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_respect_capacity() {
        let fx = Fixture::new();
        let first = fx.character("Leader");
        let event = fx.event_with(3, &[first.id]).await;
        let candidates: Vec<Character> = (0..8).map(|i| fx.character(&format!("c{i}"))).collect();

        let event_id = event.id;
        let store = Arc::new(fx.store);
        let handles: Vec<_> = candidates
            .iter()
            .map(|c| {
                let store = Arc::clone(&store);
                let id = c.id;
                tokio::spawn(async move { store.insert_within_capacity(event_id, &[id], 3).await })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 2);
        assert_eq!(store.count(event_id).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_keeping_one() {
        let fx = Fixture::new();
        let a = fx.character("Alpha");
        let b = fx.character("Beta");
        let outsider = fx
            .store
            .insert_character("Outsider", fx.organizer.id, fx.other_server.id, fx.breed.id);
        let event = fx.event_with(3, &[a.id, b.id]).await;

        assert_eq!(
            fx.store.delete_keeping_one(event.id, outsider.id).await,
            Err(DomainError::NotInRoster)
        );

        fx.store.delete_keeping_one(event.id, a.id).await.unwrap();
        assert_eq!(fx.store.count(event.id).await.unwrap(), 1);

        assert_eq!(
            fx.store.delete_keeping_one(event.id, b.id).await,
            Err(DomainError::RosterWouldBeEmpty)
        );
        assert_eq!(fx.store.count(event.id).await.unwrap(), 1);
    }
}
