pub mod colors;
pub mod detect;
pub mod format;
pub mod logging;
pub mod print;
