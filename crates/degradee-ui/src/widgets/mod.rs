pub mod degradee;

pub use degradee::Degradee;
