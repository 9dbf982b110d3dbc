use crate::{Booking, ReservationError, Result};

/// A guest account and the bookings it holds.
///
/// Passwords are stored and compared as opaque plaintext strings, matching
/// the on-disk customers format this engine is compatible with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Case-sensitive unique key
    pub username: String,
    pub password: String,
    /// Insertion order is chronological
    pub bookings: Vec<Booking>,
}

/// The registry of customer accounts.
///
/// Owns every customer and, transitively, every booking. Usernames are
/// exact-match keys; no normalization or case folding is performed.
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, username: &str) -> bool {
        self.customers.iter().any(|c| c.username == username)
    }

    /// Registers a new account with an empty booking list.
    pub fn create(&mut self, username: &str, password: &str) -> Result<()> {
        if self.exists(username) {
            return Err(ReservationError::AlreadyExists {
                resource: "customer",
                field: "username",
                value: username.to_string(),
            });
        }

        self.customers.push(Customer {
            username: username.to_string(),
            password: password.to_string(),
            bookings: Vec::new(),
        });

        Ok(())
    }

    /// Checks credentials with exact string equality.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&Customer> {
        self.customers
            .iter()
            .find(|c| c.username == username && c.password == password)
            .ok_or(ReservationError::InvalidCredentials)
    }

    pub fn set_password(&mut self, username: &str, new_password: &str) -> Result<()> {
        let customer = self.get_mut(username)?;

        customer.password = new_password.to_string();
        Ok(())
    }

    pub fn delete(&mut self, username: &str) -> Result<()> {
        let index = self
            .customers
            .iter()
            .position(|c| c.username == username)
            .ok_or_else(|| ReservationError::not_found("customer", username))?;

        self.customers.remove(index);
        Ok(())
    }

    pub fn get(&self, username: &str) -> Result<&Customer> {
        self.customers
            .iter()
            .find(|c| c.username == username)
            .ok_or_else(|| ReservationError::not_found("customer", username))
    }

    pub fn get_mut(&mut self, username: &str) -> Result<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.username == username)
            .ok_or_else(|| ReservationError::not_found("customer", username))
    }

    pub fn all(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_duplicate_signup_keeps_original() {
        let mut directory = CustomerDirectory::new();
        directory.create("alice", "hunter2").unwrap();

        let result = directory.create("alice", "other");

        assert!(
            matches!(result, Err(ReservationError::AlreadyExists { .. })),
            "duplicate signup should be rejected"
        );
        assert_eq!(
            directory.get("alice").unwrap().password,
            "hunter2",
            "the existing record should be untouched"
        );
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_authenticate_exact_match() {
        let mut directory = CustomerDirectory::new();
        directory.create("Bob", "secret").unwrap();

        assert!(directory.authenticate("Bob", "secret").is_ok());
        assert!(
            matches!(
                directory.authenticate("bob", "secret"),
                Err(ReservationError::InvalidCredentials)
            ),
            "usernames are case-sensitive"
        );
        assert!(matches!(
            directory.authenticate("Bob", "Secret"),
            Err(ReservationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_set_password_and_delete() {
        let mut directory = CustomerDirectory::new();
        directory.create("carol", "one").unwrap();

        directory.set_password("carol", "two").unwrap();
        assert!(directory.authenticate("carol", "two").is_ok());

        directory.delete("carol").unwrap();
        assert!(!directory.exists("carol"));
        assert!(matches!(
            directory.delete("carol"),
            Err(ReservationError::NotFound { .. })
        ));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut directory = CustomerDirectory::new();
        directory.create("zoe", "z").unwrap();
        directory.create("adam", "a").unwrap();

        let names: Vec<_> = directory.all().map(|c| c.username.as_str()).collect();
        assert_eq!(names, vec!["zoe", "adam"]);
    }
}
