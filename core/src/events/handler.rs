use super::GameSignal;

/// Anything that reacts to host game signals.
///
/// The host (or an adapter around its callbacks) calls these synchronously
/// on its update thread, in the order the events happened.
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &GameSignal);

    fn handle_signals(&mut self, signals: &[GameSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
