// Open file limit check module

pub mod check;
pub mod proc;

#[cfg(test)]
mod tests;

pub use check::UlimitCheck;
pub use proc::ProcSample;
