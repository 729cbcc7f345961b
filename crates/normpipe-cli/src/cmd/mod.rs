// crates/normpipe-cli/src/cmd/mod.rs

pub mod run;
pub mod stages;
