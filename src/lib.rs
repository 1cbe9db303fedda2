#[macro_use] extern crate rocket;
#[macro_use] extern crate serde_derive;

pub mod common;
pub mod config;
pub mod rest_api;
pub mod rpc_api;
