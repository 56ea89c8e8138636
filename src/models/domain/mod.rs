pub mod objective;
pub mod question;
pub mod trophy;
pub mod user;

pub use objective::Objective;
pub use question::{NormalizedQuestion, Question};
pub use trophy::Trophy;
pub use user::User;
