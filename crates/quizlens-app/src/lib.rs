pub mod context;
pub mod controller;
pub mod events;
pub mod session;
pub mod state;
