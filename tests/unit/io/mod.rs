mod error;
mod image;
mod logger;
