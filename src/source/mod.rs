pub mod static_files;
pub mod traits;

pub use static_files::StaticFileSource;
pub use traits::PriceSource;
