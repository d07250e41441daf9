pub mod chrome_session;
pub mod driver;
pub mod js_executor;

pub use chrome_session::{ChromeLauncher, ChromeSession};
pub use driver::{DriverSession, SessionFactory};
pub use js_executor::JsExecutor;
