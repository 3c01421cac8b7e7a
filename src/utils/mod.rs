pub mod capture;
pub mod debounce;
pub mod geocoding;
