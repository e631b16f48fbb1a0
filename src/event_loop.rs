use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// A centralized event loop that drives the main UI thread.
///
/// This struct implements the "Message Pump" pattern. It is responsible for:
/// 1. Owning the main execution thread.
/// 2. Polling the input driver for user events (keyboard, mouse, paste, focus, resize).
/// 3. Dispatching those events to a provided handler closure.
///
/// Every state transition of the desktop happens synchronously inside the
/// handler; nothing runs on other threads.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn poll(&mut self) -> io::Result<Option<Event>> {
        if self.driver.poll(self.poll_interval)? {
            Ok(Some(self.driver.read()?))
        } else {
            Ok(None)
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Runs the application loop, taking control of the current thread.
    ///
    /// The `handler` is called with:
    /// - `Some(event)` when an input event occurs.
    /// - `None` when the poll interval elapses without an event (used for drawing).
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain the queue so drag bursts don't fall behind the renderer.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    struct Scripted {
        events: VecDeque<Event>,
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn drains_burst_then_ticks() {
        let driver = Scripted {
            events: VecDeque::from(vec![key('a'), key('b'), key('q')]),
        };
        let mut event_loop = EventLoop::new(driver, Duration::from_millis(0));
        let mut seen = Vec::new();
        let mut ticks = 0;
        event_loop
            .run(|_, event| match event {
                Some(Event::Key(k)) if k.code == KeyCode::Char('q') => Ok(ControlFlow::Quit),
                Some(evt) => {
                    seen.push(evt);
                    Ok(ControlFlow::Continue)
                }
                None => {
                    ticks += 1;
                    Ok(ControlFlow::Continue)
                }
            })
            .unwrap();
        assert_eq!(seen, vec![key('a'), key('b')]);
        // one tick before the burst; the burst is drained without ticking
        assert_eq!(ticks, 1);
    }

    #[test]
    fn poll_returns_none_when_idle() {
        let driver = Scripted {
            events: VecDeque::new(),
        };
        let mut event_loop = EventLoop::new(driver, Duration::from_millis(0));
        assert!(event_loop.poll().unwrap().is_none());
        event_loop.driver().events.push_back(key('x'));
        assert_eq!(event_loop.poll().unwrap(), Some(key('x')));
    }
}
