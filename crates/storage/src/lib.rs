#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
pub mod memory;
pub mod open_food_facts;
pub mod settings;
