// Library for tests to access modules

pub mod config;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod telemetry_repo;
