pub mod decrypt;
pub mod file;
pub mod traits;

// Re-export
pub use decrypt::{CommandDecryptor, Decryptor, PlainDecryptor};
pub use file::FileHabitRepository;
pub use traits::HabitRepository;
