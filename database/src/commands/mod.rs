pub mod create;
pub mod migrate;
pub mod seed;
