pub mod build;
pub mod check;
pub mod context;
pub mod init;
pub mod languages;
