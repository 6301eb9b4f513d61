//! In-memory implementation of all three store traits

use crate::{
    NewProduct, NewRole, NewUser, Product, ProductStore, RecordId, Result, Role, RoleStore,
    StoreError, User, UserStore,
};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct State {
    next_id: RecordId,
    users: BTreeMap<RecordId, User>,
    products: BTreeMap<RecordId, Product>,
    roles: BTreeMap<RecordId, Role>,
}

impl State {
    fn allocate_id(&mut self) -> RecordId {
        self.next_id += 1;
        self.next_id
    }
}

/// Thread-safe store holding users, products and roles in memory
///
/// Lists are returned in id order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidRecord(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn check_role_exists(state: &State, role_id: Option<RecordId>) -> Result<()> {
    match role_id {
        Some(id) if !state.roles.contains_key(&id) => {
            Err(StoreError::InvalidRecord(format!("role {} does not exist", id)))
        }
        _ => Ok(()),
    }
}

impl UserStore for InMemoryStore {
    fn create_user(&self, user: NewUser) -> Result<User> {
        let email = required(&user.email, "email")?;
        let display_name = required(&user.display_name, "display name")?;

        let mut state = self.write()?;
        check_role_exists(&state, user.role_id)?;
        if state.users.values().any(|u| u.email.eq_ignore_ascii_case(&email)) {
            return Err(StoreError::Duplicate { kind: "user", key: email });
        }

        let id = state.allocate_id();
        let user = User {
            id,
            email,
            display_name,
            role_id: user.role_id,
        };
        state.users.insert(id, user.clone());
        debug!(target: "store.users", id, "User created");
        Ok(user)
    }

    fn get_user(&self, id: RecordId) -> Result<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    fn update_user(&self, user: User) -> Result<User> {
        let email = required(&user.email, "email")?;
        let display_name = required(&user.display_name, "display name")?;

        let mut state = self.write()?;
        if !state.users.contains_key(&user.id) {
            return Err(StoreError::NotFound { kind: "user", id: user.id });
        }
        check_role_exists(&state, user.role_id)?;
        if state
            .users
            .values()
            .any(|u| u.id != user.id && u.email.eq_ignore_ascii_case(&email))
        {
            return Err(StoreError::Duplicate { kind: "user", key: email });
        }

        let user = User {
            email,
            display_name,
            ..user
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn delete_user(&self, id: RecordId) -> Result<()> {
        self.write()?
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { kind: "user", id })
    }
}

impl ProductStore for InMemoryStore {
    fn create_product(&self, product: NewProduct) -> Result<Product> {
        let name = required(&product.name, "product name")?;

        let mut state = self.write()?;
        if state.products.values().any(|p| p.name == name) {
            return Err(StoreError::Duplicate { kind: "product", key: name });
        }

        let id = state.allocate_id();
        let product = Product {
            id,
            name,
            category: product.category,
        };
        state.products.insert(id, product.clone());
        debug!(target: "store.products", id, "Product created");
        Ok(product)
    }

    fn get_product(&self, id: RecordId) -> Result<Option<Product>> {
        Ok(self.read()?.products.get(&id).cloned())
    }

    fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    fn update_product(&self, product: Product) -> Result<Product> {
        let name = required(&product.name, "product name")?;

        let mut state = self.write()?;
        if !state.products.contains_key(&product.id) {
            return Err(StoreError::NotFound { kind: "product", id: product.id });
        }
        if state
            .products
            .values()
            .any(|p| p.id != product.id && p.name == name)
        {
            return Err(StoreError::Duplicate { kind: "product", key: name });
        }

        let product = Product { name, ..product };
        state.products.insert(product.id, product.clone());
        Ok(product)
    }

    fn delete_product(&self, id: RecordId) -> Result<()> {
        self.write()?
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { kind: "product", id })
    }
}

impl RoleStore for InMemoryStore {
    fn create_role(&self, role: NewRole) -> Result<Role> {
        let name = required(&role.name, "role name")?;

        let mut state = self.write()?;
        if state.roles.values().any(|r| r.name == name) {
            return Err(StoreError::Duplicate { kind: "role", key: name });
        }

        let id = state.allocate_id();
        let role = Role {
            id,
            name,
            permissions: role.permissions,
        };
        state.roles.insert(id, role.clone());
        debug!(target: "store.roles", id, "Role created");
        Ok(role)
    }

    fn get_role(&self, id: RecordId) -> Result<Option<Role>> {
        Ok(self.read()?.roles.get(&id).cloned())
    }

    fn list_roles(&self) -> Result<Vec<Role>> {
        Ok(self.read()?.roles.values().cloned().collect())
    }

    fn update_role(&self, role: Role) -> Result<Role> {
        let name = required(&role.name, "role name")?;

        let mut state = self.write()?;
        if !state.roles.contains_key(&role.id) {
            return Err(StoreError::NotFound { kind: "role", id: role.id });
        }
        if state.roles.values().any(|r| r.id != role.id && r.name == name) {
            return Err(StoreError::Duplicate { kind: "role", key: name });
        }

        let role = Role { name, ..role };
        state.roles.insert(role.id, role.clone());
        Ok(role)
    }

    // Users pointing at a deleted role keep the dangling id; callers decide
    // whether to reassign them.
    fn delete_role(&self, id: RecordId) -> Result<()> {
        self.write()?
            .roles
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { kind: "role", id })
    }
}
