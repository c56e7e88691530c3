//! Customer domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::Credential;

/// Customer domain entity
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// None until the customer has chosen a password
    pub credential: Option<Credential>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer
    pub fn new(id: Uuid, email: String, name: String, credential: Option<Credential>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            name,
            credential,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the customer has a stored credential
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Update the customer's name
    pub fn update_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Replace the customer's credential
    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
        self.updated_at = Utc::now();
    }
}

/// Customer creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomer {
    /// Customer email address
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Customer display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    /// Initial password; may be absent when the customer is provisioned
    /// first and picks a password later
    pub password: Option<String>,
}

/// Customer update data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCustomer {
    /// New display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
}

/// Customer response (safe to return to client)
#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponse {
    /// Unique customer identifier
    pub id: Uuid,
    /// Customer email address
    pub email: String,
    /// Customer display name
    pub name: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            email: customer.email,
            name: customer.name,
            created_at: customer.created_at,
        }
    }
}
