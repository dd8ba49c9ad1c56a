pub mod ja;
