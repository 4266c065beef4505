pub mod github;
pub mod resume;
