pub mod address;
pub mod device;
