pub mod api;
pub mod cli;
pub mod errors;
pub mod state;
#[cfg(test)]
pub mod tests;
