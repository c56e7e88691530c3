//! Customer repository with an in-memory store.
//!
//! The store is the explicit serialization boundary for credentials: the
//! encoder gate is invoked by name right where a row is written or read,
//! so nothing outside this module ever maps a credential column.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Credential, CredentialGate, Customer};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find customer by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>>;

    /// Find customer by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    /// Persist a new customer
    async fn create(&self, customer: Customer) -> AppResult<Customer>;

    /// Update customer profile fields
    async fn update(&self, id: Uuid, name: Option<String>) -> AppResult<Customer>;

    /// Replace a customer's stored credential
    async fn set_credential(&self, id: Uuid, credential: Credential) -> AppResult<Customer>;

    /// Delete customer by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// List all customers
    async fn list(&self) -> AppResult<Vec<Customer>>;
}

/// Storage row for a customer.
///
/// Plain string columns, the way a relational row would look. The
/// `credential` column holds the storage form produced by the gate and must
/// fit [`crate::config::CREDENTIAL_COLUMN_LENGTH`] characters.
#[derive(Debug, Clone)]
struct CustomerRecord {
    id: Uuid,
    email: String,
    name: String,
    credential: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// In-memory implementation of [`CustomerRepository`].
pub struct InMemoryCustomerStore {
    gate: CredentialGate,
    rows: RwLock<HashMap<Uuid, CustomerRecord>>,
}

impl InMemoryCustomerStore {
    /// Create an empty store writing credentials through the given gate.
    pub fn new(gate: CredentialGate) -> Self {
        Self {
            gate,
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Convert a stored row to the domain entity (read path of the gate).
    fn to_domain(&self, record: CustomerRecord) -> Customer {
        Customer {
            id: record.id,
            email: record.email,
            name: record.name,
            credential: self.gate.to_domain_form(record.credential),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// Convert a domain entity to its stored row (write path of the gate).
    fn to_record(&self, customer: Customer) -> AppResult<CustomerRecord> {
        let credential = self
            .gate
            .to_storage_form(customer.credential.as_ref().map(|c| c.as_str()))?;
        Ok(CustomerRecord {
            id: customer.id,
            email: customer.email,
            name: customer.name,
            credential,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        })
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned().map(|r| self.to_domain(r)))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .find(|r| r.email == email)
            .cloned()
            .map(|r| self.to_domain(r)))
    }

    async fn create(&self, customer: Customer) -> AppResult<Customer> {
        let record = self.to_record(customer)?;
        let mut rows = self.rows.write().await;
        if rows.values().any(|r| r.email == record.email) {
            return Err(AppError::conflict("Customer"));
        }
        let stored = record.clone();
        rows.insert(record.id, record);
        Ok(self.to_domain(stored))
    }

    async fn update(&self, id: Uuid, name: Option<String>) -> AppResult<Customer> {
        let mut rows = self.rows.write().await;
        let record = rows.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = name {
            record.name = name;
            record.updated_at = Utc::now();
        }
        let updated = record.clone();
        drop(rows);
        Ok(self.to_domain(updated))
    }

    async fn set_credential(&self, id: Uuid, credential: Credential) -> AppResult<Customer> {
        // Write path: the credential column only ever receives gate output.
        let stored = self.gate.to_storage_form(Some(credential.as_str()))?;
        let mut rows = self.rows.write().await;
        let record = rows.get_mut(&id).ok_or(AppError::NotFound)?;
        record.credential = stored;
        record.updated_at = Utc::now();
        let updated = record.clone();
        drop(rows);
        Ok(self.to_domain(updated))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        rows.remove(&id).map(|_| ()).ok_or(AppError::NotFound)
    }

    async fn list(&self) -> AppResult<Vec<Customer>> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().map(|r| self.to_domain(r)).collect())
    }
}
