#![allow(non_snake_case)]

pub mod error;
pub mod forms;
pub mod models;

pub use error::*;
pub use forms::*;
pub use models::*;
