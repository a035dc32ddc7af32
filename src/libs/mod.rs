pub mod catalog;
pub mod classify;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod messages;
pub mod ordering;
pub mod profile;
pub mod record;
pub mod selection;
pub mod session;
pub mod source;
pub mod stats;
pub mod view;
