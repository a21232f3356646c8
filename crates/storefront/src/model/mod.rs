//! Pure data structures implementing the
//! [`ActorEntity`](resource_actor::ActorEntity) trait, plus the caller
//! identity attached to every authenticated operation.

pub mod order;
pub mod rating;

pub use order::*;
pub use rating::*;

/// Identifier of a customer account. Accounts are managed elsewhere, so the
/// storefront treats them as opaque strings.
pub type UserId = String;

/// Identifier of a catalog product, likewise owned by another service.
pub type ProductId = String;

/// Authenticated identity attached to a request.
///
/// Every operation that reads or mutates customer-owned data receives a
/// `Caller` and checks it explicitly. There is no ambient identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Account on whose behalf the request runs.
    pub user: UserId,
    /// Whether the account holds the admin capability.
    pub admin: bool,
}

impl Caller {
    /// A regular customer caller.
    pub fn customer(user: impl Into<UserId>) -> Self {
        Self {
            user: user.into(),
            admin: false,
        }
    }

    /// A caller holding the admin capability.
    pub fn admin(user: impl Into<UserId>) -> Self {
        Self {
            user: user.into(),
            admin: true,
        }
    }

    /// Whether this caller may read data owned by `owner`.
    ///
    /// Admins may read anything; customers only their own records.
    pub fn can_access(&self, owner: &UserId) -> bool {
        self.admin || self.user == *owner
    }
}
