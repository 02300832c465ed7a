pub mod controller;
pub mod dtos;
pub mod errors;
pub mod renderer;
pub mod service;
