use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::MockConfig;
use crate::models::User;
use crate::store::{simulate_latency, seed, StoreError};

/// Пользователи мок-стенда. Пароли хранятся как есть - это демо-данные,
/// bcrypt здесь был бы только в продакшене.
pub struct UserStore {
    delays: MockConfig,
    inner: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn with_seed(delays: MockConfig) -> Self {
        Self {
            delays,
            inner: RwLock::new(seed::users()),
        }
    }

    // Без искусственной задержки: вызывается Basic-auth extractor'ом
    // на каждом запросе
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.inner.read().await;
        users.iter().find(|u| u.email == email).cloned()
    }

    /// Проверка учетных данных для extractor'а - тоже без задержки
    pub async fn verify(&self, email: &str, password: &str) -> Option<User> {
        let user = self.find_by_email(email).await?;
        user.verify_password(password).then_some(user)
    }

    /// Логин с клиентской формы: эмулирует поход в сеть
    pub async fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        simulate_latency(self.delays.auth_delay_ms).await;
        self.verify(email, password).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, StoreError> {
        simulate_latency(self.delays.auth_delay_ms).await;
        let mut users = self.inner.write().await;
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::EmailTaken(email.to_string()));
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}
