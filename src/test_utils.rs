use crate::models::domain::question::{Category, QuestionPayload, SchoolLevel};
use crate::models::domain::Question;
use crate::models::dto::candidate::{MatchingPairInput, MemoryCardInput, QuestionCandidate};
