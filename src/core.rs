pub mod auth;
pub mod carousel;
pub mod content;
pub mod models;
pub mod ports;
pub mod services;
pub mod storer;
pub mod tokener;
