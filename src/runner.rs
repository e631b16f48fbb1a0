use std::io;
use std::time::Duration;

use crate::desktop::Desktop;
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::window::PlacementSource;

/// Drive `desktop` until it asks to quit. Frames are drawn on idle ticks, so
/// a burst of input is applied before the next frame goes out.
pub fn run_desktop<O, D, P>(
    output: &mut O,
    driver: D,
    desktop: &mut Desktop<P>,
    poll_interval: Duration,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
    P: PlacementSource,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.run(|_, event| {
        match event {
            Some(evt) => {
                desktop.handle_event(&evt);
            }
            None => output.draw(|mut frame| desktop.render(&mut frame))?,
        }
        if desktop.quit_requested() {
            Ok(ControlFlow::Quit)
        } else {
            Ok(ControlFlow::Continue)
        }
    })
}
