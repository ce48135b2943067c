pub mod connection;
pub mod quick;
pub mod smart_qa;
