pub mod format;
pub mod panic_hook;
