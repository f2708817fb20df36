mod config;
pub use config::*;

mod flash;
pub use flash::*;

mod particle;
pub use particle::*;

mod rocket;
pub use rocket::*;

mod simulation;
pub use simulation::*;
