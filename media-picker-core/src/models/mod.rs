pub mod asset;
pub mod error;
pub mod options;
pub mod pending;
pub mod resource;
