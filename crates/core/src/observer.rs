/// Receives change events from a controller.
///
/// Observers are how a host learns that derived values were rewritten, for
/// example to schedule a redraw. Any `FnMut(&E)` closure is an observer, and
/// `()` is an observer that ignores every event.
pub trait Observer<E> {
    /// Observes one event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit<O: Observer<u32>>(observer: &mut O, events: &[u32]) {
        for event in events {
            observer.observe(event);
        }
    }

    #[test]
    fn closures_observe_events() {
        let mut seen = Vec::new();
        emit(&mut |e: &u32| seen.push(*e), &[1, 2, 3]);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn unit_ignores_events() {
        emit(&mut (), &[1, 2, 3]);
    }
}
