use crate::pov::CenteredPov;

/// Receives the controller's pose whenever it changes
pub trait PovObserver {
    fn pov_changed(&mut self, pov: &CenteredPov);
}

impl<F> PovObserver for F
where
    F: FnMut(&CenteredPov),
{
    fn pov_changed(&mut self, pov: &CenteredPov) {
        self(pov)
    }
}
