mod config;
mod journey;
mod summary;
mod wire;
