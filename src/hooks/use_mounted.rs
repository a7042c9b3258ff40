use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Indica si el componente sigue montado. Las respuestas async que llegan
/// después del unmount se descartan consultando `is_mounted()`.
#[derive(Clone, Debug)]
pub struct MountFlag(Rc<Cell<bool>>);

impl MountFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[hook]
pub fn use_mounted() -> MountFlag {
    let flag = use_memo((), |_| MountFlag::new());
    {
        let flag = (*flag).clone();
        use_effect_with((), move |_| move || flag.release());
    }
    (*flag).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_seen_by_every_clone() {
        let flag = MountFlag::new();
        let in_flight = flag.clone();
        assert!(in_flight.is_mounted());
        flag.release();
        assert!(!in_flight.is_mounted());
    }
}
