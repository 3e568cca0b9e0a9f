pub mod outcome;

pub use outcome::{GroupOutcome, InitReport};
