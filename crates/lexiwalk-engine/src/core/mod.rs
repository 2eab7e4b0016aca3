pub mod fetch;
pub mod session;
pub mod timer;
