pub mod book;
pub mod record;

pub use book::{AddressBook, UpcomingBirthday};
pub use record::Record;
