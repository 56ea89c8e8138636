pub mod objective_repository;
pub mod question_repository;
pub mod trophy_repository;
pub mod user_repository;

pub use objective_repository::{MongoObjectiveRepository, ObjectiveRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use trophy_repository::{MongoTrophyRepository, TrophyRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
