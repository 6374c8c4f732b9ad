//! User repository
//!
//! The password hash is written but never selected back out.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewUser;

/// User as returned to clients
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl User {
    /// Full shape for a stored user: input fields plus assigned id.
    pub fn from_new(id: i64, user: NewUser) -> Self {
        Self {
            id,
            name: user.name,
            surname: user.surname,
            email: user.email,
        }
    }
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user. A duplicate email fails with `DbError::Constraint`.
    pub async fn create(&self, user: &NewUser) -> Result<User, DbError> {
        let user = sqlx::query_as(
            r#"
            INSERT INTO users (name, surname, email, password_hash)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, surname, email
            "#,
        )
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a batch of users atomically. Returns the number inserted.
    pub async fn create_many(&self, users: &[NewUser]) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        for user in users {
            sqlx::query(
                "INSERT INTO users (name, surname, email, password_hash) VALUES (?, ?, ?, ?)",
            )
            .bind(&user.name)
            .bind(&user.surname)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(users.len() as u64)
    }

    /// List every user in id order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as("SELECT id, name, surname, email FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(users)
    }

    /// Overwrite all fields of user `id`. Returns rows affected (0 or 1).
    pub async fn update(&self, id: i64, user: &NewUser) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = ?, surname = ?, email = ?, password_hash = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete user `id`. Returns rows affected (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Stored password hash for user `id`.
    pub async fn password_hash(&self, id: i64) -> Result<Option<String>, DbError> {
        let hash = sqlx::query_scalar("SELECT password_hash FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    fn new_user(i: u32) -> NewUser {
        NewUser {
            name: format!("user{i}"),
            surname: format!("surname{i}"),
            email: format!("email{i}@test.ru"),
            password_hash: format!("hash{i}"),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let pool = create_memory_pool().await.unwrap();
        let repo = UserRepo::new(&pool);

        let first = repo.create(&new_user(0)).await.unwrap();
        let second = repo.create(&new_user(1)).await.unwrap();

        assert!(first.id >= 1);
        assert!(second.id > first.id);
        assert_eq!(repo.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn duplicate_email_is_constraint_violation() {
        let pool = create_memory_pool().await.unwrap();
        let repo = UserRepo::new(&pool);

        repo.create(&new_user(0)).await.unwrap();
        let mut dup = new_user(1);
        dup.email = "email0@test.ru".into();

        let err = repo.create(&dup).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ids_not_reused_after_delete() {
        let pool = create_memory_pool().await.unwrap();
        let repo = UserRepo::new(&pool);

        let first = repo.create(&new_user(0)).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(&new_user(1)).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn update_touches_only_target_row() {
        let pool = create_memory_pool().await.unwrap();
        let repo = UserRepo::new(&pool);

        let a = repo.create(&new_user(0)).await.unwrap();
        let b = repo.create(&new_user(1)).await.unwrap();

        let changed = repo.update(a.id, &new_user(7)).await.unwrap();
        assert_eq!(changed, 1);

        let users = repo.list().await.unwrap();
        assert_eq!(users[0], User::from_new(a.id, new_user(7)));
        assert_eq!(users[1], b);
        assert_eq!(repo.password_hash(a.id).await.unwrap().as_deref(), Some("hash7"));
    }

    #[tokio::test]
    async fn update_and_delete_missing_rows_affect_nothing() {
        let pool = create_memory_pool().await.unwrap();
        let repo = UserRepo::new(&pool);

        assert_eq!(repo.update(42, &new_user(0)).await.unwrap(), 0);
        assert_eq!(repo.delete(42).await.unwrap(), 0);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_many_rolls_back_on_conflict() {
        let pool = create_memory_pool().await.unwrap();
        let repo = UserRepo::new(&pool);

        repo.create(&new_user(2)).await.unwrap();
        let batch: Vec<_> = (0..5).map(new_user).collect();

        let err = repo.create_many(&batch).await.unwrap_err();
        assert!(matches!(err, DbError::Constraint(_)));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
