//! Domain entities - the core business objects.

mod choice;

mod question;

pub use choice::{Choice, NewChoice};
pub use question::{NewQuestion, Question};
