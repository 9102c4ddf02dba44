use derive_more::Display;

mod owner;
mod visit;

pub use owner::*;
pub use visit::*;

/// Runtime tag of the entities a [`Rule`](crate::validation::Rule) can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Kind {
    Owner,
    Pet,
    Visit,
    FollowUpVisit,
}

impl Kind {
    /// The kind this kind extends, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<Self> {
        match self {
            Self::FollowUpVisit => Some(Self::Visit),
            Self::Owner | Self::Pet | Self::Visit => None,
        }
    }

    /// Returns `true` if an entity of `self` can be used wherever `other` is expected,
    /// which is the case for `other` itself and every kind extending it.
    #[must_use]
    pub fn is_assignable_to(&self, other: Self) -> bool {
        let mut current = Some(*self);

        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }

        false
    }
}

pub trait Entity {
    fn kind(&self) -> Kind;

    /// The visit this entity is or extends.
    fn as_visit(&self) -> Option<&Visit> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_assignable_to() {
        assert!(Kind::Visit.is_assignable_to(Kind::Visit));
        assert!(Kind::FollowUpVisit.is_assignable_to(Kind::Visit));
        assert!(Kind::FollowUpVisit.is_assignable_to(Kind::FollowUpVisit));

        assert!(!Kind::Visit.is_assignable_to(Kind::FollowUpVisit));
        assert!(!Kind::Owner.is_assignable_to(Kind::Visit));
        assert!(!Kind::Pet.is_assignable_to(Kind::Visit));
        assert!(!Kind::Visit.is_assignable_to(Kind::Pet));
    }

    #[test]
    fn test_display() {
        assert_eq!(Kind::FollowUpVisit.to_string(), "FollowUpVisit");
    }
}
