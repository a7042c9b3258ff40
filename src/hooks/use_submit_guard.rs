use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Marca de envío en curso de un formulario. Un segundo submit mientras hay
/// uno pendiente no obtiene ticket y se ignora.
#[derive(Clone, Debug, Default)]
pub struct InFlight(Rc<Cell<bool>>);

/// Mientras viva, el formulario está ocupado. Se libera al soltarlo,
/// también si la tarea async termina con error.
#[must_use]
#[derive(Debug)]
pub struct SubmitTicket(Rc<Cell<bool>>);

impl InFlight {
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        if self.0.replace(true) {
            log::debug!("[FORM] Submit ignorado, hay uno en curso");
            None
        } else {
            Some(SubmitTicket(self.0.clone()))
        }
    }

    pub fn is_busy(&self) -> bool {
        self.0.get()
    }
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[hook]
pub fn use_submit_guard() -> InFlight {
    (*use_memo((), |_| InFlight::default())).clone()
}
