pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud_page;
pub mod format;
pub mod http;
pub mod resource;
