pub mod content;
pub mod content_stores;
pub mod database_validator;
pub mod inspirations;
pub mod journal;
pub mod sampler;
