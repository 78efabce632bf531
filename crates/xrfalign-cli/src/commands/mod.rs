pub mod apply;
pub mod histogram;
pub mod info;
