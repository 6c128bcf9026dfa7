/// Core data types for the flight network
///
/// This module defines the fundamental types used throughout the system:
/// - CityId: dense index of a city in `[0, num_cities)`
/// - City: a registered city with its display name
/// - Flight: one directed adjacency entry carrying cost, distance and duration
/// - FlightRecord: one undirected flight described by city names

pub mod city;
pub mod flight;

pub use city::{City, CityId};
pub use flight::{Flight, FlightRecord};
