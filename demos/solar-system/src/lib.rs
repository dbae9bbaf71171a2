use wasm_bindgen::prelude::*;

mod bodies;
mod camera_rig;
mod game;
mod options;
mod orbit;
mod panel;
mod starfield;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
