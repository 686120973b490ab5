#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod navigation;
pub mod time;

pub use error::Error;
pub use navigation::{
    IgnoreReason, NavigationSnapshot, Navigator, NavigatorError, Phase, Transition,
};
pub use time::Clock;
