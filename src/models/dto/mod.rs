pub mod candidate;

pub use candidate::{MatchingPairInput, MemoryCardInput, QuestionCandidate};
