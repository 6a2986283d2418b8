//! Interned identifiers for nodes and categories.
//!
//! Ids arrive as strings from the data source but are compared on every
//! filter pass and selection lookup, so they are interned once and carried
//! as 4-byte symbols afterwards. The interner is append-only and shared
//! process-wide; multiple canvases can coexist without interference.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

macro_rules! interned_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Spur);

        impl $name {
            /// Intern a string, or return the existing symbol if already interned.
            pub fn intern(s: &str) -> Self {
                $name(INTERNER.get_or_intern(s))
            }

            /// Resolve back to the original string.
            pub fn as_str(&self) -> &str {
                INTERNER.resolve(&self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok($name::intern(&s))
            }
        }
    };
}

interned_id! {
    /// Identifier of a diagram node (e.g. `stg_orders`, `Workspaces`).
    NodeId
}

interned_id! {
    /// Key of a node category (e.g. `source`, `mart`, `entity`).
    CategoryId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = NodeId::intern("fact_orders");
        let b = NodeId::intern("fact_orders");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "fact_orders");
    }

    #[test]
    fn node_and_category_ids_are_distinct_types() {
        // Same backing interner, but the wrappers never mix at compile time.
        let n = NodeId::intern("source");
        let c = CategoryId::intern("source");
        assert_eq!(n.as_str(), c.as_str());
    }
}
