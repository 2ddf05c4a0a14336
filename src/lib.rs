//! Phishing Drill - behavioral simulation of phishing-training trials

pub mod core;
pub mod report;
pub mod training;
