use std::collections::VecDeque;

use crate::signal::Signal;

/// Host-side signal consumer. Implemented per target host; the facade
/// borrows a sink only for the duration of one callback pump, so no
/// subscription can outlive its owner.
pub trait SignalSink {
    fn emit(&mut self, signal: Signal);
}

/// Draining FIFO sink for hosts that poll instead of subscribing.
#[derive(Debug, Default)]
pub struct SignalQueue {
    signals: VecDeque<Signal>,
}

impl SignalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn pop(&mut self) -> Option<Signal> {
        self.signals.pop_front()
    }

    /// Takes every queued signal, oldest first.
    pub fn drain(&mut self) -> Vec<Signal> {
        self.signals.drain(..).collect()
    }
}

impl SignalSink for SignalQueue {
    fn emit(&mut self, signal: Signal) {
        self.signals.push_back(signal);
    }
}
