pub mod config;
pub mod router;
pub mod state;

#[cfg(test)]
pub mod testing;
