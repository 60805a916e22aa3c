pub mod app;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod exercise;
pub mod logging;
pub mod meals;
pub mod profile;
pub mod recipes;
pub mod session;
pub mod storage;
pub mod water;
