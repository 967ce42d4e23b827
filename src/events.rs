/// Things the driver reacts to, decoupled from the terminal backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Stop the simulation
    Exit,

    /// The terminal changed size and the screen should be redrawn from scratch
    Resize,
}
