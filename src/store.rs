use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use std::time::Duration;

use crate::config::Config;

const CONNECT_RETRIES: usize = 2;
const CONNECT_MAX_DELAY_MS: u64 = 500;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(5);
/// Upper bound on the whole initial connect, retries included
const STARTUP_DEADLINE: Duration = Duration::from_secs(5);

/// Read-only view of the key-value store used by the HTTP handlers
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Every key currently in the store, in whatever order the store returns them.
    async fn keys(&self) -> Result<Vec<String>>;

    /// Value stored under `key`, or `None` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Round-trip liveness check.
    async fn ping(&self) -> Result<()>;
}

/// Shareable Redis client for use across async handlers
///
/// Wraps a `ConnectionManager`, which multiplexes one connection and
/// reconnects on its own when the server goes away. Cloning is cheap and
/// every clone talks over the same connection.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Open a connection to the Redis server named by the config.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the initial connection
    /// cannot be established.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let url = config.redis_url();
        tracing::info!("Connecting to Redis at: {}:{}", config.redis_host, config.redis_port);

        let client = redis::Client::open(url.as_str())
            .with_context(|| format!("Invalid Redis URL: {}", url))?;

        let manager_config = ConnectionManagerConfig::new()
            .set_number_of_retries(CONNECT_RETRIES)
            .set_max_delay(CONNECT_MAX_DELAY_MS)
            .set_connection_timeout(CONNECT_TIMEOUT)
            .set_response_timeout(RESPONSE_TIMEOUT);

        let manager = tokio::time::timeout(
            STARTUP_DEADLINE,
            ConnectionManager::new_with_config(client, manager_config),
        )
        .await
        .with_context(|| {
            format!("Failed to create Redis connection: timed out after {:?}", STARTUP_DEADLINE)
        })?
        .context("Failed to create Redis connection")?;

        tracing::info!("Successfully connected to Redis");

        Ok(Self { manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn keys(&self) -> Result<Vec<String>> {
        let mut conn = self.manager.clone();

        let keys: Vec<String> = redis::cmd("KEYS")
            .arg("*")
            .query_async(&mut conn)
            .await
            .context("Failed to list keys from Redis")?;

        tracing::debug!("Listed {} keys", keys.len());
        Ok(keys)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.manager.clone();

        let value: Option<String> = conn
            .get(key)
            .await
            .with_context(|| format!("Failed to read key from Redis: {}", key))?;

        tracing::debug!("Read key {} (found: {})", key, value.is_some());
        Ok(value)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.manager.clone();

        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("Failed to execute PING")?;

        if reply == "PONG" {
            tracing::debug!("PING succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Unexpected PING reply: {}", reply))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> Config {
        Config {
            redis_host: "localhost".to_string(),
            redis_port: 6379,
            service_port: 5000,
            service_host: "0.0.0.0".to_string(),
        }
    }

    #[test]
    fn test_store_is_clonable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<RedisStore>();
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RedisStore>();
    }

    #[tokio::test]
    async fn test_connection_failure_returns_quickly() {
        let config = Config {
            redis_host: "127.0.0.1".to_string(),
            redis_port: 1,
            ..local_config()
        };

        let started = std::time::Instant::now();
        let result = tokio::time::timeout(
            Duration::from_secs(10),
            RedisStore::from_config(&config),
        )
        .await
        .expect("connecting to a closed port should not hang");

        assert!(result.is_err());
        assert!(
            started.elapsed() <= STARTUP_DEADLINE + Duration::from_secs(1),
            "took {:?}",
            started.elapsed()
        );
    }

    #[tokio::test]
    async fn test_connection_failure_has_context() {
        // Port 1 is never a Redis server
        let config = Config {
            redis_port: 1,
            ..local_config()
        };

        let result = RedisStore::from_config(&config).await;

        match result {
            Ok(_) => panic!("connecting to port 1 should fail"),
            Err(e) => {
                let error_msg = e.to_string();
                assert!(
                    error_msg.contains("Failed to create Redis connection"),
                    "Error should have context: {}",
                    error_msg
                );
            }
        }
    }

    #[tokio::test]
    async fn test_ping_and_read_with_local_redis() {
        // Requires a Redis server on localhost:6379; skipped otherwise
        let store = match RedisStore::from_config(&local_config()).await {
            Ok(store) => store,
            Err(e) => {
                println!("Skipping, Redis not reachable: {}", e);
                return;
            }
        };

        store.ping().await.expect("PING should succeed");

        let mut conn = store.manager.clone();
        let _: () = conn
            .set("redis-kv-api-test-key", "bar")
            .await
            .expect("SET should succeed");

        let value = store.get("redis-kv-api-test-key").await.unwrap();
        assert_eq!(value.as_deref(), Some("bar"));

        let keys = store.keys().await.unwrap();
        assert!(keys.contains(&"redis-kv-api-test-key".to_string()));

        let missing = store.get("redis-kv-api-test-missing").await.unwrap();
        assert_eq!(missing, None);

        let _: () = conn
            .del("redis-kv-api-test-key")
            .await
            .expect("DEL should succeed");
    }

    #[tokio::test]
    async fn test_memory_store_reads() {
        let store = testing::MemoryStore::with_entries(&[("a", "1"), ("b", "")]);

        let mut keys = store.keys().await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some(""));
        assert_eq!(store.get("c").await.unwrap(), None);
    }
}
