// Public modules
pub mod dedupe;
pub mod error;
pub mod person;
pub mod pluralize;
pub mod question;
pub mod random;
pub mod sort;
pub mod text;

// Re-export common types for convenience
pub use dedupe::dedupe_adjacent;
pub use error::{Error, ErrorCode, Result};
pub use person::PersonName;
pub use pluralize::pluralize;
pub use question::{Answer, AnswerType, Question, QuestionConfig};
pub use text::capitalize;
