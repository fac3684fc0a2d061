//! Content fingerprints for snapshot bodies

use blake3::Hasher;

/// A hash value represented as a hex string
pub type HashValue = String;

/// Hash computer for snapshot content
#[derive(Debug, Default)]
pub struct HashComputer;

impl HashComputer {
    pub fn new() -> Self {
        Self
    }

    /// Compute an order-sensitive hash over a sequence of lines
    pub fn hash_lines<S: AsRef<str>>(&self, lines: &[S]) -> HashValue {
        let mut hasher = Hasher::new();
        for line in lines {
            let bytes = line.as_ref().as_bytes();
            // Length prefix keeps ["ab", "c"] and ["a", "bc"] apart
            hasher.update(&(bytes.len() as u64).to_le_bytes());
            hasher.update(bytes);
        }
        hasher.finalize().to_hex().to_string()
    }
}
