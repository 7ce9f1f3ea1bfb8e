use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::animal::errors::AnimalError;
use crate::domain::animal::models::Animal;
use crate::domain::animal::models::AnimalId;
use crate::domain::animal::ports::AnimalRepository;
use crate::domain::user::models::UserId;

pub struct PostgresAnimalRepository {
    pool: PgPool,
}

impl PostgresAnimalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AnimalRow {
    id: Uuid,
    name: String,
    species: String,
    created_at: DateTime<Utc>,
}

impl From<AnimalRow> for Animal {
    fn from(row: AnimalRow) -> Self {
        Animal {
            id: AnimalId(row.id),
            name: row.name,
            species: row.species,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl AnimalRepository for PostgresAnimalRepository {
    async fn create(&self, animal: Animal) -> Result<Animal, AnimalError> {
        sqlx::query(
            r#"
            INSERT INTO animals (id, name, species, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(animal.id.0)
        .bind(&animal.name)
        .bind(&animal.species)
        .bind(animal.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AnimalError::DatabaseError(e.to_string()))?;

        Ok(animal)
    }

    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, AnimalError> {
        let row = sqlx::query_as::<_, AnimalRow>(
            r#"
            SELECT id, name, species, created_at
            FROM animals
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AnimalError::DatabaseError(e.to_string()))?;

        Ok(row.map(Animal::from))
    }

    async fn list_all(&self) -> Result<Vec<Animal>, AnimalError> {
        let rows = sqlx::query_as::<_, AnimalRow>(
            r#"
            SELECT id, name, species, created_at
            FROM animals
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AnimalError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Animal::from).collect())
    }

    async fn insert_like(
        &self,
        user_id: &UserId,
        animal_id: &AnimalId,
    ) -> Result<(), AnimalError> {
        sqlx::query(
            r#"
            INSERT INTO user_likes (user_id, animal_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id.0)
        .bind(animal_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AnimalError::AlreadyLiked;
                }
            }
            AnimalError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn delete_like(
        &self,
        user_id: &UserId,
        animal_id: &AnimalId,
    ) -> Result<(), AnimalError> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_likes
            WHERE user_id = $1 AND animal_id = $2
            "#,
        )
        .bind(user_id.0)
        .bind(animal_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| AnimalError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AnimalError::LikeNotFound);
        }

        Ok(())
    }

    async fn list_liked_by_user(&self, user_id: &UserId) -> Result<Vec<Animal>, AnimalError> {
        let rows = sqlx::query_as::<_, AnimalRow>(
            r#"
            SELECT a.id, a.name, a.species, a.created_at
            FROM animals a
            JOIN user_likes ul ON ul.animal_id = a.id
            WHERE ul.user_id = $1
            ORDER BY ul.created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AnimalError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Animal::from).collect())
    }
}
