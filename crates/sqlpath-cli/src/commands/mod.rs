pub mod concept;
pub mod curated;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod path;
pub mod schema;
pub mod shared;
pub mod stats;
pub mod strategy;
pub mod validate;
