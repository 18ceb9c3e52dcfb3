pub mod build;
pub mod generate;
pub mod metadata;
pub mod push;
pub mod up;
pub mod validate;
