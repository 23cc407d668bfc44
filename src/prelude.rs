pub use crate::cli::{Assistant, Reply, command::Command, interact, run_app};
pub use crate::domain::{AddressBook, Record, UpcomingBirthday};
pub use crate::errors::AppError;
pub use crate::store::{BookStore, JsonStore, MemStore, load_or_default};
pub use crate::validation::{format_birthday, parse_birthday, validate_phone};
