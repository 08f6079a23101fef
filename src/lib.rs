pub mod app_config;
pub mod backend;
pub mod cascade;
pub mod console;
pub mod domain;
pub mod map;
pub mod roster;
pub mod session;
pub mod ui;
