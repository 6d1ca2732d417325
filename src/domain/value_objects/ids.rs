//! Typed entity ids
//!
//! Each entity kind gets its own id newtype so a scheme id can never be
//! handed to a base lookup. Ids are plain `u32` on the wire
//! (serde-transparent) to match the repository's integer keys.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Raw integer value (repository key)
            pub fn raw(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id! {
    /// Identity of a minion
    MinionId
}

entity_id! {
    /// Identity of an evil scheme
    SchemeId
}

entity_id! {
    /// Identity of a secret base
    BaseId
}

entity_id! {
    /// Identity of an equipment item
    EquipmentId
}
