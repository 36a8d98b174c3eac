pub mod add;
pub mod clear;
pub mod complete;
pub mod completions;
pub mod list;
