//! Entropy source implementations.

pub mod fixed;
pub mod os;
pub mod reader;
pub mod rng;

pub use fixed::FixedSource;
pub use os::OsSource;
pub use reader::ReaderSource;
pub use rng::RngSource;
