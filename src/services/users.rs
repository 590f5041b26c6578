use bcrypt::{hash, verify, DEFAULT_COST};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::entities::user;
use crate::error::{AppError, AppResult};
use crate::repository::users as user_repo;
use crate::validation;

pub async fn register(
    db: &DatabaseConnection,
    username: String,
    email: String,
    password: String,
) -> AppResult<user::Model> {
    validation::validate_username(&username)?;
    validation::validate_email(&email)?;
    validation::validate_new_password(&password)?;

    let txn = db.begin().await?;

    if user_repo::find_by_username(&txn, &username).await?.is_some() {
        return Err(AppError::AlreadyExistingItem(
            "User with this username already exists".to_string(),
        ));
    }
    if user_repo::find_by_email(&txn, &email).await?.is_some() {
        return Err(AppError::AlreadyExistingItem(
            "User with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&password)?;
    let saved = user_repo::insert(&txn, username, email, password_hash).await?;

    txn.commit().await?;
    tracing::info!(user_id = saved.id, "registered user");

    Ok(saved)
}

pub async fn login(db: &DatabaseConnection, username: &str, password: &str) -> AppResult<()> {
    authenticate_by_username(db, username, password).await?;

    Ok(())
}

pub async fn find_by_username(db: &DatabaseConnection, username: &str) -> AppResult<user::Model> {
    validation::validate_username(username)?;

    user_repo::find_by_username(db, username)
        .await?
        .ok_or_else(|| {
            AppError::NonExistentItem("User with this username does not exist".to_string())
        })
}

pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> AppResult<user::Model> {
    validation::validate_email(email)?;

    user_repo::find_by_email(db, email).await?.ok_or_else(|| {
        AppError::NonExistentItem("User with this email does not exist".to_string())
    })
}

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<user::Model>> {
    let users = user_repo::find_all(db).await?;

    if users.is_empty() {
        return Err(AppError::NonExistentItem(
            "There are no users found".to_string(),
        ));
    }
    Ok(users)
}

pub async fn update_password(
    db: &DatabaseConnection,
    username: &str,
    new_password: &str,
    old_password: &str,
) -> AppResult<()> {
    validation::validate_new_password(new_password)?;

    let txn = db.begin().await?;

    authenticate_by_username(&txn, username, old_password).await?;

    if new_password == old_password {
        return Err(AppError::InvalidArgument(
            "New password can not be the same as the old one".to_string(),
        ));
    }

    let password_hash = hash_password(new_password)?;
    user_repo::update_password(&txn, username, password_hash).await?;

    txn.commit().await?;
    tracing::info!(username, "updated password");

    Ok(())
}

pub async fn update_email(
    db: &DatabaseConnection,
    new_email: &str,
    old_email: &str,
    password: &str,
) -> AppResult<()> {
    validation::validate_email(new_email)?;

    let txn = db.begin().await?;

    authenticate_by_email(&txn, old_email, password).await?;

    if user_repo::find_by_email(&txn, new_email).await?.is_some() {
        return Err(AppError::AlreadyExistingItem(
            "User with this email already exists".to_string(),
        ));
    }

    user_repo::update_email(&txn, new_email, old_email).await?;

    txn.commit().await?;
    tracing::info!(old_email, new_email, "updated email");

    Ok(())
}

pub async fn delete_by_username(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> AppResult<()> {
    let txn = db.begin().await?;

    authenticate_by_username(&txn, username, password).await?;
    user_repo::delete_by_username(&txn, username).await?;

    txn.commit().await?;
    tracing::info!(username, "deleted user");

    Ok(())
}

pub async fn delete_by_email(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> AppResult<()> {
    let txn = db.begin().await?;

    authenticate_by_email(&txn, email, password).await?;
    user_repo::delete_by_email(&txn, email).await?;

    txn.commit().await?;
    tracing::info!(email, "deleted user");

    Ok(())
}

async fn authenticate_by_username<C>(conn: &C, username: &str, password: &str) -> AppResult<()>
where
    C: ConnectionTrait,
{
    validation::validate_username(username)?;
    validation::validate_password(password)?;

    let user = user_repo::find_by_username(conn, username)
        .await?
        .ok_or_else(|| {
            AppError::NonExistentItem("User with this username does not exist".to_string())
        })?;

    verify_password(password, &user.password_hash)
}

async fn authenticate_by_email<C>(conn: &C, email: &str, password: &str) -> AppResult<()>
where
    C: ConnectionTrait,
{
    validation::validate_email(email)?;
    validation::validate_password(password)?;

    let user = user_repo::find_by_email(conn, email).await?.ok_or_else(|| {
        AppError::NonExistentItem("User with this email does not exist".to_string())
    })?;

    verify_password(password, &user.password_hash)
}

fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

fn verify_password(password: &str, password_hash: &str) -> AppResult<()> {
    let matches = verify(password, password_hash)
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))?;

    if !matches {
        return Err(AppError::InvalidArgument(
            "Passwords do not match".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_passwords_verify_and_reject() {
        let hashed = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hashed).is_ok());

        let err = verify_password("battery staple", &hashed).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Passwords do not match");
    }
}
