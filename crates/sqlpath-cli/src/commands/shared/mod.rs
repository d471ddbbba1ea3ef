#[cfg(test)]
pub mod fixtures;
pub mod limit;
pub mod parse;
