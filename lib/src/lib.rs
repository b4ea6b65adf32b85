//! # Yu-Gi-Oh! Opening Hand Simulation Library
//!
//! openhand estimates the probability that a randomly drawn opening hand
//! satisfies user-defined hand conditions built from card groups and combos.
//! It repeatedly draws a hand from a spread-out deck list and scores it
//! against each hand condition, accumulating empirical success counts.

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate base64;
extern crate bincode;
extern crate chrono;
extern crate flate2;
extern crate rand;
extern crate regex;

pub mod api;
pub mod combo;
pub mod condition;
pub mod deck;
pub mod environment;
pub mod error;
pub mod group;
pub mod hand;
pub mod save;
pub mod simulation;
pub mod ydke;

pub use crate::api::run;
pub use crate::error::Error;
