use crate::domain::entities::user::NewUser;
use crate::errors::DomainError;
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password_hash: "$2b$10$hash".to_string(),
        roles: vec![],
    }
}

#[tokio::test]
async fn test_create_assigns_ids() {
    let repo = InMemoryUserRepository::new();
    let first = repo.create(new_user("a@example.com")).await.unwrap();
    let second = repo.create(new_user("b@example.com")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(repo.email_exists("a@example.com").await.unwrap());
    assert!(!repo.email_exists("c@example.com").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let repo = InMemoryUserRepository::new();
    repo.create(new_user("a@example.com")).await.unwrap();

    let err = repo.create(new_user("a@example.com")).await.unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let repo = InMemoryUserRepository::new();
    let err = repo.delete(999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_role_catalogue_round_trip() {
    let repo = InMemoryUserRepository::new();
    repo.create_roles(&["admin".to_string(), "editor".to_string()])
        .await
        .unwrap();

    assert_eq!(repo.list_roles().await.unwrap(), vec!["admin", "editor"]);

    repo.delete_roles(&["admin".to_string()]).await.unwrap();
    assert_eq!(repo.list_roles().await.unwrap(), vec!["editor"]);

    let err = repo
        .delete_roles(&["missing".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
