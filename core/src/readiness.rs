//! One-shot readiness signal.
//!
//! The shell must not resolve routes until the feature flags have loaded. [`readiness`] hands out a
//! single [`ReadySetter`] (consumed when it fires) and a cloneable [`ReadinessGate`] that any
//! number of observers can check or await. Once open, the gate never closes again.

use futures::{
    channel::oneshot,
    future::{self, FutureExt, Shared},
};
use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

pub fn readiness() -> (ReadySetter, ReadinessGate) {
    let (tx, rx) = oneshot::channel();
    let ready = Arc::new(AtomicBool::new(false));

    let setter = ReadySetter {
        tx,
        ready: ready.clone(),
    };
    let gate = ReadinessGate {
        ready,
        rx: rx.shared(),
    };

    (setter, gate)
}

pub struct ReadySetter {
    tx: oneshot::Sender<()>,
    ready: Arc<AtomicBool>,
}

impl ReadySetter {
    pub fn mark_ready(self) {
        self.ready.store(true, Ordering::Release);
        // every gate may already be gone, in which case nobody is waiting
        let _ = self.tx.send(());
    }
}

impl fmt::Debug for ReadySetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadySetter")
            .field("ready", &self.ready.load(Ordering::Acquire))
            .finish()
    }
}

#[derive(Clone)]
pub struct ReadinessGate {
    ready: Arc<AtomicBool>,
    rx: Shared<oneshot::Receiver<()>>,
}

impl ReadinessGate {
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Resolves once the setter fires. Never resolves if the setter is dropped unfired.
    pub async fn wait(&self) {
        if self.is_ready() {
            return;
        }
        if self.rx.clone().await.is_err() {
            future::pending::<()>().await;
        }
    }
}

impl fmt::Debug for ReadinessGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadinessGate")
            .field("ready", &self.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn starts_closed() {
        let (_setter, gate) = readiness();
        assert!(!gate.is_ready());
        assert_eq!(gate.wait().now_or_never(), None);
    }

    #[test]
    fn opens_for_every_clone() {
        let (setter, gate) = readiness();
        let observer = gate.clone();

        setter.mark_ready();

        assert!(gate.is_ready());
        assert!(observer.is_ready());
        block_on(observer.wait());
        assert_eq!(gate.wait().now_or_never(), Some(()));
    }

    #[test]
    fn gates_created_after_opening_are_open() {
        let (setter, gate) = readiness();
        setter.mark_ready();
        let late = gate.clone();
        assert!(late.is_ready());
        assert_eq!(late.wait().now_or_never(), Some(()));
    }

    #[test]
    fn waiter_is_woken_by_the_setter() {
        let (setter, gate) = readiness();
        let waiting = std::thread::spawn(move || block_on(gate.wait()));
        setter.mark_ready();
        waiting.join().expect("waiter panicked");
    }

    #[test]
    fn dropped_setter_keeps_the_gate_closed() {
        let (setter, gate) = readiness();
        drop(setter);
        assert!(!gate.is_ready());
        assert_eq!(gate.wait().now_or_never(), None);
    }

    #[test]
    fn marking_ready_with_no_observers_is_fine() {
        let (setter, gate) = readiness();
        drop(gate);
        setter.mark_ready();
    }
}
