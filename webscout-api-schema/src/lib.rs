pub mod crawl;
pub mod dashboard;
pub mod export;
pub mod folders;
pub mod project;
pub mod tree;
