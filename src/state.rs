#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransitionState {
    Entering,   // New slide animating in
    Displaying, // Slide fully shown, background drifting
}
