mod transform;

pub use transform::{Rotations, Transform, SPIN_FRAMES, SPIN_STEP_DEGREES};
