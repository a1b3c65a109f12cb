pub mod navigate_handler;
pub mod navigate_params;
