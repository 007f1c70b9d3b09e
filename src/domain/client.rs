use std::fmt;

use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Entity, Id};

/// 顧客ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Deref,
)]
pub struct ClientId(Uuid);

impl Id for ClientId {
    type Inner = Uuid;
}

/// 顧客エンティティ
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: String,
    phone: String,
    email: String,
}

impl Client {
    pub fn create(
        id: ClientId,
        name: String,
        phone: String,
        email: String,
    ) -> Result<Self, ClientError> {
        Self::validate_created(&name, &email)?;
        Ok(Client {
            id,
            name,
            phone,
            email,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    fn validate_created(name: &str, email: &str) -> Result<(), ClientError> {
        if name.trim().is_empty() {
            return Err(ClientError::NameIsBlank);
        }
        if email.trim().is_empty() {
            return Err(ClientError::EmailIsBlank);
        }
        Ok(())
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}

/// 顧客エラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum ClientError {
    /// 名前が空欄です
    #[display(fmt = "Name cannot be blank")]
    NameIsBlank,
    /// メールアドレスが空欄です
    #[display(fmt = "Email cannot be blank")]
    EmailIsBlank,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ClientId {
        ClientId::from(Uuid::from_u128(7))
    }

    #[test]
    fn test_client_create() {
        let client = Client::create(
            id(),
            "Alice".to_owned(),
            "555-0100".to_owned(),
            "alice@example.com".to_owned(),
        )
        .unwrap();
        assert_eq!(client.id(), id());
        assert_eq!(client.name(), "Alice");
        assert_eq!(client.phone(), "555-0100");
        assert_eq!(client.email(), "alice@example.com");
        assert_eq!(client.to_string(), "Alice (alice@example.com)");
    }

    #[test]
    fn test_client_phone_is_optional() {
        let client = Client::create(
            id(),
            "Bob".to_owned(),
            String::new(),
            "bob@example.com".to_owned(),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_requires_name_and_email() {
        let blank_name = Client::create(id(), "  ".to_owned(), "1".to_owned(), "a@b.c".to_owned());
        assert_eq!(blank_name, Err(ClientError::NameIsBlank));
        let blank_email = Client::create(id(), "Carol".to_owned(), "1".to_owned(), "".to_owned());
        assert_eq!(blank_email, Err(ClientError::EmailIsBlank));
    }
}
