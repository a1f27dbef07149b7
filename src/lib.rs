//! Garden: draw a random plant from Trefle, tag it, and keep the ones you
//! like in a Postgres-backed garden.

pub mod configuration;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
pub mod trefle;
