pub mod audio;
pub mod behavior;
pub mod clock;
pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod registry;
pub mod render;
pub mod spawn;
pub mod world;
