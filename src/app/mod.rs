//! 应用层

pub mod birds;
