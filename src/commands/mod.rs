pub mod attend;
pub mod attendances;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod new;
pub mod share;
pub mod update;
