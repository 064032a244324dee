pub mod email;
pub mod payment;
pub mod webhook;
