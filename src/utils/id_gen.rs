//! ID generation utilities

use rand::Rng;

/// Characters used for ID generation
const ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random alphanumeric ID of specified length
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ID_CHARS.len());
            ID_CHARS[idx] as char
        })
        .collect()
}

/// Generate a hyphenated v4 UUID (36 characters)
pub fn generate_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Source of fresh account ids
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn generate(&mut self) -> String {
        self()
    }
}

/// Random v4 UUIDs, the default
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> String {
        generate_uuid()
    }
}

/// Random alphanumeric ids of a fixed length
#[derive(Debug, Clone, Copy)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(crate::DEFAULT_RANDOM_ID_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&mut self) -> String {
        generate_id(self.length)
    }
}

/// Deterministic ids `{prefix}1`, `{prefix}2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 1 }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_length() {
        assert_eq!(generate_id(8).len(), 8);
        assert_eq!(generate_id(4).len(), 4);
        assert_eq!(generate_id(32).len(), 32);
    }

    #[test]
    fn test_generate_id_alphanumeric() {
        let id = generate_id(64);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_uuid() {
        let id = generate_uuid();
        assert_eq!(id.len(), 36);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_ne!(id, generate_uuid());
    }

    #[test]
    fn test_random_generator_default_length() {
        let mut generator = RandomIdGenerator::default();
        assert_eq!(generator.generate().len(), crate::DEFAULT_RANDOM_ID_LENGTH);
    }

    #[test]
    fn test_sequential_generator() {
        let mut generator = SequentialIdGenerator::new("acc-");
        assert_eq!(generator.generate(), "acc-1");
        assert_eq!(generator.generate(), "acc-2");
        assert_eq!(generator.generate(), "acc-3");
    }

    #[test]
    fn test_closure_generator() {
        let mut n = 0;
        let mut generator = move || {
            n += 10;
            n.to_string()
        };
        assert_eq!(IdGenerator::generate(&mut generator), "10");
        assert_eq!(IdGenerator::generate(&mut generator), "20");
    }
}
