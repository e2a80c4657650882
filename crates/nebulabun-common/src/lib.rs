pub mod errors;

pub use errors::{ConfigError, NativeError, NebulabunError, WindowError};

pub type Result<T> = std::result::Result<T, NebulabunError>;
