use super::*;
use crate::ID;
use crate::MAX_SESSIONS;
use crate::Order;
use crate::SESSION_TTL;
use crate::gameplay::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use std::time::Duration;
use tokio::sync::RwLock;

type Sessions = HashMap<ID<Session>, Arc<Mutex<Session>>>;

/// Registry of live sessions.
///
/// The map lock is held only long enough to find a session; each session has
/// its own mutex, so one player's round serializes its history reads and
/// appends without blocking anyone else.
///
/// At most `capacity` sessions are held. Sessions idle for `ttl` or longer
/// are dropped by [`Arcade::sweep`] and before every [`Arcade::start`].
pub struct Arcade {
    order: Order,
    preload: Vec<Move>,
    capacity: usize,
    ttl: Duration,
    sessions: RwLock<Sessions>,
}

impl Arcade {
    pub fn new(order: Order) -> Self {
        Self::from((order, Vec::new()))
    }
    /// Replaces the default session cap and idle expiry.
    pub fn limit(self, capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            ..self
        }
    }
    pub fn order(&self) -> Order {
        self.order
    }
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Arcade {
    /// Opens a session seeded with the preload history and returns its id.
    /// Fails when the arcade is full even after expiring idle sessions.
    pub async fn start(&self) -> anyhow::Result<ID<Session>> {
        let mut sessions = self.sessions.write().await;
        self.expire(&mut sessions);
        anyhow::ensure!(
            sessions.len() < self.capacity,
            "session limit of {} reached",
            self.capacity
        );
        let id = ID::default();
        let mut session = Session::new(self.order);
        session.import(self.preload.iter().copied());
        sessions.insert(id, Arc::new(Mutex::new(session)));
        log::info!("[arcade] started session {}", id);
        Ok(id)
    }
    /// Drops every idle session. Returns how many were removed.
    pub async fn sweep(&self) -> usize {
        self.expire(&mut *self.sessions.write().await)
    }
    /// Closes a session and forgets its history.
    pub async fn close(&self, id: ID<Session>) -> anyhow::Result<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| log::info!("[arcade] closed session {}", id))
            .ok_or_else(|| anyhow::anyhow!("session not found"))
    }
    /// Plays a round, returning it with the session's updated tally.
    pub async fn play(&self, id: ID<Session>, player: Move) -> anyhow::Result<(Round, Tally)> {
        let session = self.session(id).await?;
        let mut session = session.lock().await;
        let round = session.play(player);
        log::debug!("[session {}] {}", id, round);
        Ok((round, session.tally()))
    }
    /// Bulk-appends historical moves. Returns the session's history length.
    pub async fn import<I>(&self, id: ID<Session>, moves: I) -> anyhow::Result<usize>
    where
        I: IntoIterator<Item = Move>,
    {
        let session = self.session(id).await?;
        let total = session.lock().await.import(moves);
        log::info!("[session {}] history now {} moves", id, total);
        Ok(total)
    }
    pub async fn tally(&self, id: ID<Session>) -> anyhow::Result<Tally> {
        Ok(self.session(id).await?.lock().await.tally())
    }
    /// Rendered transition table of a session's model.
    pub async fn table(&self, id: ID<Session>) -> anyhow::Result<String> {
        Ok(self.session(id).await?.lock().await.predictor().table().to_string())
    }
    /// Sessions mid-round are locked and therefore not idle; they are kept.
    fn expire(&self, sessions: &mut Sessions) -> usize {
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(session) => session.idle() < self.ttl,
            Err(_) => true,
        });
        let expired = before - sessions.len();
        if expired > 0 {
            log::info!("[arcade] expired {} idle sessions", expired);
        }
        expired
    }
    async fn session(&self, id: ID<Session>) -> anyhow::Result<Arc<Mutex<Session>>> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("session not found"))
    }
}

/// Model order plus moves every new session starts with.
impl From<(Order, Vec<Move>)> for Arcade {
    fn from((order, preload): (Order, Vec<Move>)) -> Self {
        Self {
            order,
            preload,
            capacity: MAX_SESSIONS,
            ttl: SESSION_TTL,
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lifecycle() {
        let arcade = Arcade::new(3);
        let id = arcade.start().await.unwrap();
        assert_eq!(arcade.count().await, 1);
        let (round, tally) = arcade.play(id, Move::Rock).await.unwrap();
        assert_eq!(round.player(), Move::Rock);
        assert_eq!(tally.total(), 1);
        arcade.close(id).await.unwrap();
        assert_eq!(arcade.count().await, 0);
        assert!(arcade.close(id).await.is_err());
        assert!(arcade.play(id, Move::Rock).await.is_err());
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let arcade = Arcade::new(3);
        let a = arcade.start().await.unwrap();
        let b = arcade.start().await.unwrap();
        assert_ne!(a, b);
        assert_eq!(arcade.import(a, [Move::Paper; 6]).await.unwrap(), 6);
        assert_eq!(arcade.import(b, [Move::Rock; 2]).await.unwrap(), 2);
        let (round, _) = arcade.play(a, Move::Paper).await.unwrap();
        assert_eq!(round.engine(), Move::Scissors);
        assert_eq!(arcade.tally(b).await.unwrap().total(), 0);
    }

    #[tokio::test]
    async fn preload_reaches_new_sessions() {
        let arcade = Arcade::from((3, vec![Move::Scissors; 5]));
        let id = arcade.start().await.unwrap();
        let (round, _) = arcade.play(id, Move::Paper).await.unwrap();
        assert_eq!(round.engine(), Move::Rock);
        assert!(arcade.table(id).await.unwrap().contains("SSS"));
    }

    #[tokio::test]
    async fn concurrent_rounds_all_land() {
        let arcade = Arc::new(Arcade::new(3));
        let id = arcade.start().await.unwrap();
        let handles = (0..32usize)
            .map(|i| {
                let arcade = arcade.clone();
                tokio::spawn(async move { arcade.play(id, Move::from(i % 3)).await })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        assert_eq!(arcade.tally(id).await.unwrap().total(), 32);
    }

    #[tokio::test]
    async fn capacity_is_enforced() {
        let arcade = Arcade::new(3).limit(2, Duration::from_secs(3600));
        let a = arcade.start().await.unwrap();
        arcade.start().await.unwrap();
        assert!(arcade.start().await.is_err());
        assert_eq!(arcade.count().await, 2);
        arcade.close(a).await.unwrap();
        assert!(arcade.start().await.is_ok());
    }

    #[tokio::test]
    async fn idle_sessions_expire_on_start() {
        let arcade = Arcade::new(3).limit(1, Duration::ZERO);
        let a = arcade.start().await.unwrap();
        let b = arcade.start().await.unwrap();
        assert_eq!(arcade.count().await, 1);
        assert!(arcade.play(a, Move::Rock).await.is_err());
        assert!(arcade.tally(b).await.is_ok());
    }

    #[tokio::test]
    async fn sweep_keeps_active_sessions() {
        let arcade = Arcade::new(3).limit(8, Duration::from_secs(3600));
        arcade.start().await.unwrap();
        arcade.start().await.unwrap();
        assert_eq!(arcade.sweep().await, 0);
        assert_eq!(arcade.count().await, 2);
        let arcade = arcade.limit(8, Duration::ZERO);
        assert_eq!(arcade.sweep().await, 2);
        assert_eq!(arcade.count().await, 0);
    }

    #[tokio::test]
    async fn unknown_session() {
        let arcade = Arcade::new(3);
        let id = ID::default();
        assert!(arcade.tally(id).await.is_err());
        assert!(arcade.table(id).await.is_err());
        assert!(arcade.import(id, [Move::Rock]).await.is_err());
    }
}
