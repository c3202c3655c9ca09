//! Advent of Code puzzle solutions
//!
//! Each day is a unit struct deriving `AdventSolver` and `AutoRegister`.
//! Linking this crate is enough to make every solver discoverable through
//! `RegistryBuilder::register_all_plugins`.

pub mod year_2023;
