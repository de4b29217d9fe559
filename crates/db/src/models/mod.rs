pub mod affirmation;
pub mod category;
pub mod custom_inspiration;
pub mod journal_entry;
pub mod quote;

/// Ids bound per `IN (...)` lookup. SQLite rejects statements with more than
/// 32766 host parameters.
pub const ID_LOOKUP_CHUNK: usize = 500;
