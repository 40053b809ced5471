pub mod delete;
pub mod notify;
pub mod warnings;
