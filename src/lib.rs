pub mod db;
pub mod error;
pub mod notification;
pub mod routes;
pub mod state;
