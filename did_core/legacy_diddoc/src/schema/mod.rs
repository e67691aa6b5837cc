pub mod authentication;
pub mod did_doc;
pub mod public_key;
pub mod service;
