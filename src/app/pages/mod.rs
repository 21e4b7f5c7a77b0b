pub mod gallery;

pub use gallery::{App, Route, Story};
