pub mod prewarm;
pub mod start;
pub mod stop;
pub mod urls;
