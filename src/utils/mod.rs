pub mod fs;
pub mod logger;
pub mod path;
pub mod signature;
pub mod version;
