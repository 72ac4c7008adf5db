//! Building blocks shared by solutions

pub mod snailfish;
