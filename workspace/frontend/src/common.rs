pub mod download;
pub mod error;
pub mod loading;
pub mod toast;
