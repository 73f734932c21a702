pub mod routes;

pub use routes::{AppRoute, AppRoutes};
