//! The value triple uniquely describing one skip graph participant.

use std::fmt;

use crate::address::Address;
use crate::identifier::Identifier;
use crate::membership_vector::MembershipVector;

/// `(Identifier, MembershipVector, Address)` — a value type, copied freely
/// and compared only by its [`Identifier`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    identifier: Identifier,
    membership_vector: MembershipVector,
    address: Address,
}

impl Identity {
    /// Build an identity from its three components.
    #[must_use]
    pub const fn new(
        identifier: Identifier,
        membership_vector: MembershipVector,
        address: Address,
    ) -> Self {
        Self {
            identifier,
            membership_vector,
            address,
        }
    }

    /// The node's identifier.
    #[must_use]
    pub const fn identifier(&self) -> Identifier {
        self.identifier
    }

    /// The node's membership vector.
    #[must_use]
    pub const fn membership_vector(&self) -> MembershipVector {
        self.membership_vector
    }

    /// The node's carried (uninterpreted) network address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("identifier", &self.identifier)
            .field("membership_vector", &self.membership_vector)
            .field("address", &self.address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities_compare_equal_on_matching_identifier() {
        let id = Identifier::from_bytes(&[1]).unwrap();
        let mv = MembershipVector::from_bytes(&[2]).unwrap();
        let a = Identity::new(id, mv, Address::new("a", 1));
        let b = Identity::new(id, mv, Address::new("a", 1));
        assert_eq!(a, b);
    }

    #[test]
    fn accessors_return_constructed_components() {
        let id = Identifier::from_bytes(&[9]).unwrap();
        let mv = MembershipVector::from_bytes(&[7]).unwrap();
        let addr = Address::new("host", 42);
        let identity = Identity::new(id, mv, addr.clone());
        assert_eq!(identity.identifier(), id);
        assert_eq!(identity.membership_vector(), mv);
        assert_eq!(identity.address(), &addr);
    }
}
