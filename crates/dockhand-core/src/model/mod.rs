//! dockhand.yaml のデータモデル

pub mod compose;
pub mod dependency;
pub mod image;
pub mod project;
pub mod repo;

pub use compose::ComposeConfig;
pub use dependency::{Dependency, DependencyKind};
pub use image::ImageConfig;
pub use project::ProjectConfig;
pub use repo::RepoEnvironment;
