use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    // Plain password, mock data only
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    // Проверить пароль (мок-данные, поэтому сравниваем как есть)
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }
}
