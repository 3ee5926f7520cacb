//! Shared test infrastructure for the domain crates.
//!
//! Test data here is seeded, never random: the same test name always
//! produces the same identifiers, names and UPCs, so failures reproduce.

use uuid::Uuid;

/// Seeded generator for catalog test data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Derive the seed from the test's own name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A UUID that is stable for this seed.
    pub fn id(&self) -> Uuid {
        let half = self.seed.to_le_bytes();
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&half);
        bytes[8..].copy_from_slice(&half);
        Uuid::from_bytes(bytes)
    }

    /// A resource name unique to this seed, e.g. `test-item-12345-main`.
    ///
    /// `prefix` says what kind of resource, `suffix` distinguishes
    /// multiple resources within one test.
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A 12-digit UPC that is stable for this seed.
    pub fn upc(&self) -> String {
        format!("{:012}", self.seed % 1_000_000_000_000)
    }
}

pub mod assertions {
    use uuid::Uuid;

    /// assert_eq for UUIDs with the failing context spelled out.
    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    /// Unwrap an Option, panicking with `context` when it is None.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_means_same_data() {
        let a = TestDataBuilder::new(42);
        let b = TestDataBuilder::new(42);

        assert_eq!(a.id(), b.id());
        assert_eq!(a.upc(), b.upc());
        assert_eq!(a.name("item", "main"), b.name("item", "main"));
    }

    #[test]
    fn test_test_names_seed_distinct_builders() {
        let a = TestDataBuilder::from_test_name("first_test");
        let b = TestDataBuilder::from_test_name("second_test");

        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), TestDataBuilder::from_test_name("first_test").id());
    }

    #[test]
    fn test_upc_is_twelve_digits() {
        let upc = TestDataBuilder::from_test_name("upc_test").upc();
        assert_eq!(upc.len(), 12);
        assert!(upc.chars().all(|c| c.is_ascii_digit()));
    }
}
