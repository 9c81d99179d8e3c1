pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod horoscope;
pub mod response;
pub mod state;
pub mod zodiac;

#[cfg(test)]
mod test_support;
