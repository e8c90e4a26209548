pub mod args;
pub mod install;
pub mod log;
pub mod materialize;
pub mod package_manager;
pub mod project;
pub mod registry;
pub mod resolver;
pub mod steps;
