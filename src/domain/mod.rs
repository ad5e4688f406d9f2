pub mod catalog;
pub mod environment;
pub mod error;
pub mod id;
pub mod order;
pub mod outcome;
pub mod service;
