pub mod policy;
pub mod update;
