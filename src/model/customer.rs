//! Customer domain models and parameters.

/// Name given to customers created implicitly by their first booking.
pub const DEFAULT_CUSTOMER_NAME: &str = "Gator User";

/// Customer identified by a normalized email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    /// Trimmed, lower-cased email.
    pub email: String,
    pub contact: Option<String>,
    pub ufid: Option<String>,
}

impl Customer {
    /// Converts an entity model to a customer domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            contact: entity.contact,
            ufid: entity.ufid,
        }
    }
}

/// Result of a find-or-create lookup, tagged with the branch that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOrCreate {
    Existing(Customer),
    Created(Customer),
}

impl FindOrCreate {
    pub fn customer(&self) -> &Customer {
        match self {
            Self::Existing(c) | Self::Created(c) => c,
        }
    }

    pub fn into_customer(self) -> Customer {
        match self {
            Self::Existing(c) | Self::Created(c) => c,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Parameters for creating or enriching a customer profile.
///
/// Fields left `None` (or blank) keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateProfileParam {
    pub email: String,
    pub name: Option<String>,
    pub ufid: Option<String>,
}
