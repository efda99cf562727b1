//! Small helpers shared by the build steps.

pub mod minify;
