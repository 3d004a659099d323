//! journal 固有のドメイン型（型と不変条件）

pub mod command;
pub mod form;
pub mod prompt;
pub mod route;

pub use command::JournalCommand;
pub use form::{EntryForm, Field, FieldRules};
pub use prompt::{ConfirmPrompt, Decision};
pub use route::Route;
