pub mod builder;
pub mod commands;
pub mod consts;
pub mod model;
pub mod options;
pub mod persistence;
pub mod renderer;
pub mod utils;
