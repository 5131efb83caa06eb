pub mod app_state;
pub mod flow;
pub mod progress;
pub mod view;
