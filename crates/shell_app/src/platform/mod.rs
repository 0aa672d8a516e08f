mod app;
mod dialogs;
mod effects;
mod logging;

pub use app::run_app;
