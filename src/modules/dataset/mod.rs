pub mod handle;
pub mod model;
pub mod preview;
pub mod route;
pub mod schema;
pub mod service;
