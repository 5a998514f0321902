pub mod codec;
pub mod errors;
pub mod filename;
pub mod handlers;
pub mod percentage;
pub mod requests;
pub mod responses;
pub mod service;
