pub mod app;
pub mod cli;
pub mod domain;

pub fn init() {
    tracing_subscriber::fmt::init();
}
