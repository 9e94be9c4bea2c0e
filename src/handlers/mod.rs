pub mod health;
pub mod hello;
pub mod greeting;

pub use health::health_handler;
pub use hello::hello_handler;
pub use greeting::{goodbye_handler, greeting_handler};
