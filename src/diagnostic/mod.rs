pub mod answers;
pub mod engine;
pub mod id;
pub mod session;

pub use answers::{count_positive, AnswerSheet};
pub use engine::{check_answers_selected, check_distinct, diagnose, generate_diagnosis, Diagnosis};
pub use id::{generator_for, IdGenerator, SequentialIdGenerator, TimestampIdGenerator, UuidIdGenerator};
pub use session::{DiagnosticSession, Stage};
