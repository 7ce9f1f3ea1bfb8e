use std::sync::Arc;
use std::sync::Mutex;

use animal_service::domain::animal::errors::AnimalError;
use animal_service::domain::animal::models::Animal;
use animal_service::domain::animal::models::AnimalId;
use animal_service::domain::animal::ports::AnimalRepository;
use animal_service::domain::animal::service::AnimalService;
use animal_service::domain::user::errors::AuthError;
use animal_service::domain::user::models::User;
use animal_service::domain::user::models::UserId;
use animal_service::domain::user::ports::UserRepository;
use animal_service::domain::user::service::AuthService;
use animal_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::TokenAuthority;
use chrono::Duration;
use serde_json::json;

/// Test application that spawns the real router on a random port.
///
/// Backed by in-memory repositories so the suite runs without a database;
/// the token authority is shared with the tests so they can mint tokens
/// with the same secrets the server verifies against.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub tokens: Arc<TokenAuthority>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let tokens = Arc::new(
            TokenAuthority::new(
                b"test_access_secret_32_bytes_long!",
                b"test_refresh_secret_32_bytes_lng!",
                "HS256",
                Duration::minutes(15),
                Duration::minutes(60 * 24),
            )
            .expect("Failed to build token authority"),
        );

        let user_repository = Arc::new(InMemoryUserRepository::default());
        let animal_repository = Arc::new(InMemoryAnimalRepository::default());

        let auth_service = Arc::new(AuthService::new(user_repository, Arc::clone(&tokens)));
        let animal_service = Arc::new(AnimalService::new(animal_repository));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let application = create_router(auth_service, animal_service);
        tokio::spawn(async move { axum::serve(listener, application).await });

        Self {
            address,
            api_client: reqwest::Client::new(),
            tokens,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Sign up an account and return the raw response.
    pub async fn signup(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/signup")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the (access, refresh) token pair.
    pub async fn login(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .post("/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        (
            body["data"]["access_token"].as_str().unwrap().to_string(),
            body["data"]["refresh_token"].as_str().unwrap().to_string(),
        )
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateAccount);
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryAnimalRepository {
    animals: Mutex<Vec<Animal>>,
    likes: Mutex<Vec<(UserId, AnimalId)>>,
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn create(&self, animal: Animal) -> Result<Animal, AnimalError> {
        self.animals.lock().unwrap().push(animal.clone());
        Ok(animal)
    }

    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, AnimalError> {
        let animals = self.animals.lock().unwrap();
        Ok(animals.iter().find(|a| a.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Animal>, AnimalError> {
        Ok(self.animals.lock().unwrap().clone())
    }

    async fn insert_like(
        &self,
        user_id: &UserId,
        animal_id: &AnimalId,
    ) -> Result<(), AnimalError> {
        let mut likes = self.likes.lock().unwrap();
        if likes.contains(&(*user_id, *animal_id)) {
            return Err(AnimalError::AlreadyLiked);
        }
        likes.push((*user_id, *animal_id));
        Ok(())
    }

    async fn delete_like(
        &self,
        user_id: &UserId,
        animal_id: &AnimalId,
    ) -> Result<(), AnimalError> {
        let mut likes = self.likes.lock().unwrap();
        let before = likes.len();
        likes.retain(|(u, a)| !(u == user_id && a == animal_id));
        if likes.len() == before {
            return Err(AnimalError::LikeNotFound);
        }
        Ok(())
    }

    async fn list_liked_by_user(&self, user_id: &UserId) -> Result<Vec<Animal>, AnimalError> {
        let likes = self.likes.lock().unwrap();
        let animals = self.animals.lock().unwrap();
        Ok(likes
            .iter()
            .filter(|(u, _)| u == user_id)
            .filter_map(|(_, a)| animals.iter().find(|animal| animal.id == *a).cloned())
            .collect())
    }
}
