pub mod enhance_controller;
pub mod interactive_controller;
pub mod serve_controller;

pub use enhance_controller::EnhanceController;
pub use interactive_controller::InteractiveController;
pub use serve_controller::ServeController;
