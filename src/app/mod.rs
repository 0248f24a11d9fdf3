mod controller;

pub use controller::DrumKitController;
