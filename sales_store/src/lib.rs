//! # Sales Store
//!
//! Repository interfaces for the records that surround a forecast: the users
//! who run it, the products it is run for and the roles that gate access.
//! The forecast engine itself never depends on these; callers inject an
//! implementation.
//!
//! ```
//! use sales_store::{InMemoryStore, NewProduct, ProductStore};
//!
//! let store = InMemoryStore::new();
//! let product = store.create_product(NewProduct::new("Pallets")).unwrap();
//! assert_eq!(store.get_product(product.id).unwrap().unwrap().name, "Pallets");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod memory;

pub use memory::InMemoryStore;

/// Identifier assigned by a store on create
pub type RecordId = u64;

/// Errors returned by store implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: RecordId },

    #[error("{kind} '{key}' already exists")]
    Duplicate { kind: &'static str, key: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// A user of the forecasting application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub email: String,
    pub display_name: String,
    pub role_id: Option<RecordId>,
}

/// Fields for a user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    pub role_id: Option<RecordId>,
}

impl NewUser {
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            role_id: None,
        }
    }

    pub fn with_role(mut self, role_id: RecordId) -> Self {
        self.role_id = Some(role_id);
        self
    }
}

/// A product whose sales are forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub category: Option<String>,
}

/// Fields for a product that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A named set of permissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RecordId,
    pub name: String,
    pub permissions: Vec<String>,
}

/// Fields for a role that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRole {
    pub name: String,
    pub permissions: Vec<String>,
}

impl NewRole {
    pub fn new(name: impl Into<String>, permissions: &[&str]) -> Self {
        Self {
            name: name.into(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Role {
    pub fn allows(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

/// CRUD contract for users
///
/// Emails are unique. `get_user` returns `Ok(None)` for an unknown id while
/// `update_user` and `delete_user` fail with [`StoreError::NotFound`].
pub trait UserStore {
    fn create_user(&self, user: NewUser) -> Result<User>;
    fn get_user(&self, id: RecordId) -> Result<Option<User>>;
    fn list_users(&self) -> Result<Vec<User>>;
    fn update_user(&self, user: User) -> Result<User>;
    fn delete_user(&self, id: RecordId) -> Result<()>;
}

/// CRUD contract for products; names are unique
pub trait ProductStore {
    fn create_product(&self, product: NewProduct) -> Result<Product>;
    fn get_product(&self, id: RecordId) -> Result<Option<Product>>;
    fn list_products(&self) -> Result<Vec<Product>>;
    fn update_product(&self, product: Product) -> Result<Product>;
    fn delete_product(&self, id: RecordId) -> Result<()>;
}

/// CRUD contract for roles; names are unique
pub trait RoleStore {
    fn create_role(&self, role: NewRole) -> Result<Role>;
    fn get_role(&self, id: RecordId) -> Result<Option<Role>>;
    fn list_roles(&self) -> Result<Vec<Role>>;
    fn update_role(&self, role: Role) -> Result<Role>;
    fn delete_role(&self, id: RecordId) -> Result<()>;
}
