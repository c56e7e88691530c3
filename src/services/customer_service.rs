//! Customer service - Handles customer-related business logic.
//!
//! SOLID (SRP): customer use cases only; hashing lives behind the gate.
//! DDD: Orchestrates domain operations over the repository port.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{CreateCustomer, CredentialGate, Customer, UpdateCustomer};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::CustomerRepository;

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Register a new customer, hashing the initial password when present
    async fn register(&self, input: CreateCustomer) -> AppResult<Customer>;

    /// Get customer by ID
    async fn get_customer(&self, id: Uuid) -> AppResult<Customer>;

    /// Get customer by email address
    async fn get_by_email(&self, email: &str) -> AppResult<Customer>;

    /// List all customers
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    /// Update customer profile details
    async fn update_customer(&self, id: Uuid, input: UpdateCustomer) -> AppResult<Customer>;

    /// Replace a customer's credential, re-applying the write-path rule
    async fn change_credential(&self, id: Uuid, new_value: &str) -> AppResult<Customer>;

    /// Delete customer
    async fn delete_customer(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of [`CustomerService`].
pub struct CustomerManager<R: CustomerRepository> {
    repo: Arc<R>,
    gate: CredentialGate,
}

impl<R: CustomerRepository> CustomerManager<R> {
    /// Create a new customer service instance
    pub fn new(repo: Arc<R>, gate: CredentialGate) -> Self {
        Self { repo, gate }
    }
}

#[async_trait]
impl<R: CustomerRepository> CustomerService for CustomerManager<R> {
    async fn register(&self, input: CreateCustomer) -> AppResult<Customer> {
        input.validate()?;

        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("Customer"));
        }

        let credential = self.gate.seal(input.password.as_deref())?;
        let customer = Customer::new(Uuid::new_v4(), input.email, input.name, credential);

        let created = self.repo.create(customer).await?;
        tracing::info!(customer_id = %created.id, "Customer registered");
        Ok(created)
    }

    async fn get_customer(&self, id: Uuid) -> AppResult<Customer> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Customer> {
        self.repo.find_by_email(email).await?.ok_or_not_found()
    }

    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        self.repo.list().await
    }

    async fn update_customer(&self, id: Uuid, input: UpdateCustomer) -> AppResult<Customer> {
        input.validate()?;
        self.repo.update(id, input.name).await
    }

    async fn change_credential(&self, id: Uuid, new_value: &str) -> AppResult<Customer> {
        // Same write-path rule as registration: plaintext gets hashed,
        // an already-hashed value is stored as-is.
        let credential = self
            .gate
            .seal(Some(new_value))?
            .ok_or_else(|| AppError::internal("seal returned no credential for a present value"))?;

        let updated = self.repo.set_credential(id, credential).await?;
        tracing::info!(customer_id = %updated.id, "Customer credential changed");
        Ok(updated)
    }

    async fn delete_customer(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(customer_id = %id, "Customer deleted");
        Ok(())
    }
}
