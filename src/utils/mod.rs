pub mod files;

pub use files::open_validated;
