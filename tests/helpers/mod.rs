#![allow(dead_code)]

pub mod events;
pub mod fake_decoder;
pub mod fake_publisher;
