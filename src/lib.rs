pub mod error;
pub mod input;
pub mod output;
pub mod run;
pub mod split;
