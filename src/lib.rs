pub mod agent;
pub mod config;
pub mod humanize;
pub mod observability;
