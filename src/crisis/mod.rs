// Crisis detection module
// Public interface for the crisis pattern screen

mod detector;

pub use detector::CrisisDetector;
