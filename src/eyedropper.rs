//! The contract for a host eye-dropper: a device that lets the user pick a
//! color from anywhere on screen.

/// The outcome of one eye-dropper acquisition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pick {
    /// The user picked a color, reported as a hex string.
    Picked(String),
    /// The user dismissed the eye-dropper. Not an error.
    Cancelled,
    /// The host has no eye-dropper.
    Unavailable,
}

/// A host eye-dropper capability.
pub trait EyeDropper {
    /// Whether the host supports an eye-dropper at all. Checked before an
    /// acquisition starts.
    fn is_available(&self) -> bool {
        true
    }

    /// Run one acquisition, blocking until the user picks or cancels.
    fn open(&mut self) -> Pick;
}

/// An eye-dropper for hosts that have none.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unsupported;

impl EyeDropper for Unsupported {
    fn is_available(&self) -> bool {
        false
    }

    fn open(&mut self) -> Pick {
        Pick::Unavailable
    }
}

impl<F: FnMut() -> Pick> EyeDropper for F {
    fn open(&mut self) -> Pick {
        self()
    }
}
