mod connection;
mod headless;

pub use connection::connect_to_browser;
pub use headless::launch_headless_browser;
