//! Selector switch drivers

pub mod selector;

pub use selector::SelectorSwitch;
