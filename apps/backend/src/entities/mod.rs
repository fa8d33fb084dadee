pub mod accounts;

pub use accounts::Entity as Accounts;
pub use accounts::Model as AccountRow;
