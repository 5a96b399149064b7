pub mod newsapi;
pub mod yahoo;
