#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod mocks;
