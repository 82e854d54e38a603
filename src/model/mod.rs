pub mod output;
pub mod raw;
pub mod story;
