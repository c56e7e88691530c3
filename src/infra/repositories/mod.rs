//! Repository implementations.

mod customer_repository;

pub use customer_repository::{CustomerRepository, InMemoryCustomerStore};

#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
