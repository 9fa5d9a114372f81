//! In-memory fakes for service tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use emoji_common::{CacheWritePolicy, JwtService};
use emoji_core::traits::{
    ActivityQuery, ActivityRepository, EmojiRepository, MeaningProvider, RepoResult,
    SessionRepository, UserRepository,
};
use emoji_core::{
    ActivityEntry, DomainError, EmojiMeaning, EmojiQuery, Session, Snowflake, SnowflakeGenerator,
    User,
};
use emoji_service::{EmojiSettings, ServiceContext};

pub const JWT_SECRET: &str = "test-secret-key-that-is-long-enough";

// ============================================================================
// Emoji cache table
// ============================================================================

#[derive(Default)]
pub struct MemoryEmojiRepo {
    rows: Mutex<HashMap<String, String>>,
    pub writes: AtomicUsize,
}

impl MemoryEmojiRepo {
    pub fn seed(&self, emoji: &str, meaning: &str) {
        self.rows
            .lock()
            .unwrap()
            .insert(emoji.to_string(), meaning.to_string());
    }

    pub fn meaning(&self, emoji: &str) -> Option<String> {
        self.rows.lock().unwrap().get(emoji).cloned()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmojiRepository for MemoryEmojiRepo {
    async fn find(&self, emoji_char: &str) -> RepoResult<Option<EmojiMeaning>> {
        Ok(self
            .meaning(emoji_char)
            .map(|meaning| EmojiMeaning::new(emoji_char, meaning)))
    }

    async fn upsert(&self, entry: &EmojiMeaning) -> RepoResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.seed(&entry.emoji_char, &entry.meaning);
        Ok(())
    }

    async fn insert_if_absent(&self, entry: &EmojiMeaning) -> RepoResult<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        match rows.get(&entry.emoji_char) {
            Some(existing) if !existing.is_empty() => Ok(false),
            _ => {
                rows.insert(entry.emoji_char.clone(), entry.meaning.clone());
                Ok(true)
            }
        }
    }
}

// ============================================================================
// Upstream provider
// ============================================================================

pub enum Reply {
    Meaning(&'static str),
    NotFound,
    Unavailable,
    Hang,
}

/// Provider with a scripted answer per emoji
pub struct ScriptedProvider {
    replies: HashMap<&'static str, Reply>,
    pub calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn reply(mut self, emoji: &'static str, reply: Reply) -> Self {
        self.replies.insert(emoji, reply);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MeaningProvider for ScriptedProvider {
    async fn lookup(&self, emoji_char: &str) -> RepoResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(emoji_char) {
            Some(Reply::Meaning(m)) => Ok(Some((*m).to_string())),
            Some(Reply::NotFound) | None => Ok(None),
            Some(Reply::Unavailable) => Err(DomainError::UpstreamUnavailable(
                "connection refused".to_string(),
            )),
            Some(Reply::Hang) => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Some("too late".to_string()))
            }
        }
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct MemoryUserRepo {
    users: Mutex<HashMap<Snowflake, (User, String)>>,
}

impl MemoryUserRepo {
    pub fn is_active(&self, id: Snowflake) -> bool {
        self.users.lock().unwrap().contains_key(&id)
    }

    pub fn email_of(&self, id: Snowflake) -> Option<String> {
        self.users.lock().unwrap().get(&id).map(|(u, _)| u.email.clone())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        self.users
            .lock()
            .unwrap()
            .insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let entry = users.get_mut(&user.id).ok_or(DomainError::UserNotFound(user.id))?;
        entry.0 = user.clone();
        if let Some(hash) = password_hash {
            entry.1 = hash.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.users
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::UserNotFound(id))
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self.users.lock().unwrap().get(&id).map(|(_, h)| h.clone()))
    }
}

// ============================================================================
// Activity log
// ============================================================================

#[derive(Default)]
pub struct MemoryActivityRepo {
    pub records: Mutex<Vec<EmojiQuery>>,
    meanings: Option<Arc<MemoryEmojiRepo>>,
}

impl MemoryActivityRepo {
    pub fn joined_with(meanings: Arc<MemoryEmojiRepo>) -> Self {
        Self {
            records: Mutex::default(),
            meanings: Some(meanings),
        }
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl ActivityRepository for MemoryActivityRepo {
    async fn record(&self, query: &EmojiQuery) -> RepoResult<()> {
        self.records.lock().unwrap().push(query.clone());
        Ok(())
    }

    async fn list(&self, user_id: Snowflake, query: ActivityQuery) -> RepoResult<Vec<ActivityEntry>> {
        let mut rows: Vec<EmojiQuery> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter(|r| query.before.map_or(true, |b| r.id < b))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(rows
            .into_iter()
            .take(usize::try_from(query.limit).unwrap_or(0))
            .map(|r| ActivityEntry {
                query_id: r.id,
                meaning: self
                    .meanings
                    .as_ref()
                    .and_then(|m| m.meaning(&r.emoji_char))
                    .unwrap_or_default(),
                emoji_char: r.emoji_char,
                created_at: r.created_at,
            })
            .collect())
    }
}

/// Activity log whose writes always fail
pub struct BrokenActivityRepo;

#[async_trait]
impl ActivityRepository for BrokenActivityRepo {
    async fn record(&self, _query: &EmojiQuery) -> RepoResult<()> {
        Err(DomainError::DatabaseError("insert failed".to_string()))
    }

    async fn list(&self, _user_id: Snowflake, _query: ActivityQuery) -> RepoResult<Vec<ActivityEntry>> {
        Err(DomainError::DatabaseError("select failed".to_string()))
    }
}

// ============================================================================
// Sessions
// ============================================================================

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionStore {
    async fn store(&self, token: &str, session: &Session, _ttl: Duration) -> RepoResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(token.to_string(), session.clone());
        Ok(())
    }

    async fn get(&self, token: &str) -> RepoResult<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(token).cloned())
    }

    async fn revoke(&self, token: &str) -> RepoResult<bool> {
        Ok(self.sessions.lock().unwrap().remove(token).is_some())
    }

    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| s.user_id != user_id);
        Ok((before - sessions.len()) as u64)
    }
}

// ============================================================================
// Failure injection
// ============================================================================

/// User store whose writes fail whenever a new password hash is included
pub struct PasswordWriteFails(pub Arc<MemoryUserRepo>);

#[async_trait]
impl UserRepository for PasswordWriteFails {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        self.0.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.0.find_by_email(email).await
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        self.0.email_exists(email).await
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        self.0.create(user, password_hash).await
    }

    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        if password_hash.is_some() {
            return Err(DomainError::DatabaseError("update failed".to_string()));
        }
        self.0.update(user, None).await
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.0.delete(id).await
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        self.0.get_password_hash(id).await
    }
}

/// Session store that cannot bulk-revoke
pub struct RevokeAllFails(pub Arc<MemorySessionStore>);

#[async_trait]
impl SessionRepository for RevokeAllFails {
    async fn store(&self, token: &str, session: &Session, ttl: Duration) -> RepoResult<()> {
        self.0.store(token, session, ttl).await
    }

    async fn get(&self, token: &str) -> RepoResult<Option<Session>> {
        self.0.get(token).await
    }

    async fn revoke(&self, token: &str) -> RepoResult<bool> {
        self.0.revoke(token).await
    }

    async fn revoke_all_for_user(&self, _user_id: Snowflake) -> RepoResult<u64> {
        Err(DomainError::CacheError("connection reset".to_string()))
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct Harness {
    pub ctx: ServiceContext,
    pub emojis: Arc<MemoryEmojiRepo>,
    pub provider: Arc<ScriptedProvider>,
    pub users: Arc<MemoryUserRepo>,
    pub activity: Arc<MemoryActivityRepo>,
    pub sessions: Arc<MemorySessionStore>,
}

pub fn harness(provider: ScriptedProvider) -> Harness {
    harness_with(provider, EmojiSettings::default())
}

pub fn harness_with_policy(provider: ScriptedProvider, write_policy: CacheWritePolicy) -> Harness {
    harness_with(
        provider,
        EmojiSettings {
            write_policy,
            ..EmojiSettings::default()
        },
    )
}

pub fn harness_with(provider: ScriptedProvider, settings: EmojiSettings) -> Harness {
    build(
        provider,
        settings,
        |users| users as Arc<dyn UserRepository>,
        |sessions| sessions as Arc<dyn SessionRepository>,
    )
}

/// Harness whose context sees the in-memory stores through wrappers
///
/// `Harness::users` and `Harness::sessions` still expose the unwrapped
/// stores so tests can inspect what was actually written.
pub fn harness_wrapping(
    provider: ScriptedProvider,
    wrap_users: impl FnOnce(Arc<MemoryUserRepo>) -> Arc<dyn UserRepository>,
    wrap_sessions: impl FnOnce(Arc<MemorySessionStore>) -> Arc<dyn SessionRepository>,
) -> Harness {
    build(provider, EmojiSettings::default(), wrap_users, wrap_sessions)
}

fn build(
    provider: ScriptedProvider,
    settings: EmojiSettings,
    wrap_users: impl FnOnce(Arc<MemoryUserRepo>) -> Arc<dyn UserRepository>,
    wrap_sessions: impl FnOnce(Arc<MemorySessionStore>) -> Arc<dyn SessionRepository>,
) -> Harness {
    let emojis = Arc::new(MemoryEmojiRepo::default());
    let provider = Arc::new(provider);
    let users = Arc::new(MemoryUserRepo::default());
    let activity = Arc::new(MemoryActivityRepo::joined_with(emojis.clone()));
    let sessions = Arc::new(MemorySessionStore::default());

    let ctx = ServiceContext::builder()
        .user_repo(wrap_users(users.clone()))
        .emoji_repo(emojis.clone())
        .activity_repo(activity.clone())
        .session_store(wrap_sessions(sessions.clone()))
        .provider(provider.clone())
        .jwt_service(Arc::new(JwtService::new(JWT_SECRET, 3600)))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .emoji_settings(settings)
        .build()
        .expect("all dependencies provided");

    Harness {
        ctx,
        emojis,
        provider,
        users,
        activity,
        sessions,
    }
}
