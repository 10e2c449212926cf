pub mod command;
pub mod complex;
pub mod consts;
pub mod enums;
pub mod error;
pub mod file;
pub mod math;
pub mod network;
pub mod prelude;
pub mod report;
pub mod scale;
pub mod util;
