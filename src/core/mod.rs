mod clock;

pub use clock::FrameClock;
