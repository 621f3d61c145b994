pub mod init;
pub mod lifecycle;
