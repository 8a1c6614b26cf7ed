#![allow(dead_code)]

mod generate;

pub use generate::{constant_series, random_series, ramp_series};
