//! Navigation stack of screens.

use tracing::{debug, info, warn};

use super::composer::ScreenComposer;
use super::context::SharedContext;
use crate::error::LayoutError;
use crate::input::InputEvent;
use crate::surface::CompositionSurface;

/// Screens in navigation order; only the top one is active.
///
/// Pushing exits the current top and enters the new screen. Popping exits
/// and drops the top, then re-enters the screen below.
#[derive(Debug)]
pub struct ScreenStack {
    context: SharedContext,
    screens: Vec<ScreenComposer>,
    size: Option<(u16, u16)>,
}

impl ScreenStack {
    /// Create an empty stack over the application context.
    pub const fn new(context: SharedContext) -> Self {
        Self {
            context,
            screens: Vec::new(),
            size: None,
        }
    }

    /// The context screens should be created with.
    pub const fn context(&self) -> &SharedContext {
        &self.context
    }

    /// Number of screens.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether no screen is on the stack.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// The active screen.
    pub fn top(&self) -> Option<&ScreenComposer> {
        self.screens.last()
    }

    /// The active screen, mutably.
    pub fn top_mut(&mut self) -> Option<&mut ScreenComposer> {
        self.screens.last_mut()
    }

    /// Make `screen` the active screen.
    ///
    /// # Errors
    ///
    /// Fails if the screen cannot be laid out at the current size; the
    /// stack is left unchanged.
    pub fn push(&mut self, mut screen: ScreenComposer) -> Result<(), LayoutError> {
        if let Some((width, height)) = self.size {
            screen.resize(width, height)?;
        }
        if let Some(top) = self.screens.last_mut() {
            top.on_exit();
        }
        debug!(screen = screen.title(), depth = self.screens.len() + 1, "push screen");
        screen.on_enter();
        self.screens.push(screen);
        Ok(())
    }

    /// Exit and drop the active screen. Returns `false` on an empty stack.
    pub fn pop(&mut self) -> bool {
        let Some(mut screen) = self.screens.pop() else {
            return false;
        };
        screen.on_exit();
        debug!(screen = screen.title(), depth = self.screens.len(), "pop screen");
        drop(screen);
        if let Some(top) = self.screens.last_mut() {
            top.on_enter();
        }
        true
    }

    /// Resize every screen, so covered ones are ready when revealed.
    ///
    /// # Errors
    ///
    /// Returns the first layout failure.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), LayoutError> {
        self.size = Some((width, height));
        for screen in &mut self.screens {
            screen.resize(width, height)?;
        }
        Ok(())
    }

    /// Draw the active screen.
    pub fn render(&self, surface: &mut dyn CompositionSurface) {
        if let Some(top) = self.screens.last() {
            top.render(surface);
        }
    }

    /// Route an event to the active screen. Resize events resize the stack.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Resize { width, height } = *event {
            if let Err(err) = self.resize(width, height) {
                warn!(width, height, error = %err, "resize failed");
            }
            return true;
        }
        self.screens.last_mut().is_some_and(|top| top.handle_input(event))
    }

    /// Exit and drop every screen, top first.
    pub fn shutdown(&mut self) {
        info!(screens = self.screens.len(), "shutting down screen stack");
        while let Some(mut screen) = self.screens.pop() {
            screen.on_exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::AppContext;
    use crate::input::KeyCode;
    use crate::layout::regions;
    use crate::surface::BufferSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn traced(stack: &ScreenStack, title: &str, log: &Log) -> ScreenComposer {
        let mut screen = ScreenComposer::new(title, Rc::clone(stack.context()));
        let (enter, exit) = (Rc::clone(log), Rc::clone(log));
        let name = title.to_string();
        screen.set_on_enter(move |_| enter.borrow_mut().push(format!("enter {name}")));
        let name = title.to_string();
        screen.set_on_exit(move |_| exit.borrow_mut().push(format!("exit {name}")));
        screen
    }

    #[test]
    fn test_push_and_pop_lifecycle() {
        let mut stack = ScreenStack::new(AppContext::new().shared());
        let log = Log::default();
        stack.resize(80, 24).unwrap();

        let home = traced(&stack, "Home", &log);
        stack.push(home).unwrap();
        let detail = traced(&stack, "Detail", &log);
        stack.push(detail).unwrap();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().unwrap().title(), "Detail");
        assert_eq!(stack.top().unwrap().size(), Some((80, 24)));

        assert!(stack.pop());
        assert_eq!(stack.top().unwrap().title(), "Home");
        assert!(stack.top().unwrap().is_active());
        assert_eq!(
            *log.borrow(),
            vec!["enter Home", "exit Home", "enter Detail", "exit Detail", "enter Home"]
        );
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = ScreenStack::new(AppContext::new().shared());
        assert!(!stack.pop());
    }

    #[test]
    fn test_resize_event_resizes_all_screens() {
        let mut stack = ScreenStack::new(AppContext::new().shared());
        let log = Log::default();
        let home = traced(&stack, "Home", &log);
        stack.push(home).unwrap();
        let detail = traced(&stack, "Detail", &log);
        stack.push(detail).unwrap();

        assert!(stack.handle_input(&InputEvent::Resize { width: 100, height: 40 }));
        assert!(stack.pop());
        assert_eq!(stack.top().unwrap().size(), Some((100, 40)));
    }

    #[test]
    fn test_push_failure_leaves_stack_unchanged() {
        let context = AppContext::new().shared();
        let mut stack = ScreenStack::new(Rc::clone(&context));
        let log = Log::default();
        stack.resize(80, 24).unwrap();
        let home = traced(&stack, "Home", &log);
        stack.push(home).unwrap();

        context.borrow_mut().regions.remove_region(regions::HEADER);
        let broken = traced(&stack, "Broken", &log);
        assert!(stack.push(broken).is_err());

        assert_eq!(stack.len(), 1);
        assert!(stack.top().unwrap().is_active());
    }

    #[test]
    fn test_render_and_input_reach_top_only() {
        let mut stack = ScreenStack::new(AppContext::new().shared());
        stack.resize(40, 10).unwrap();
        let mut surface = BufferSurface::new(40, 10);
        stack.render(&mut surface);
        assert_eq!(surface.row_text(1).trim(), "");

        let log = Log::default();
        let home = traced(&stack, "Home", &log);
        stack.push(home).unwrap();
        stack.render(&mut surface);
        assert!(surface.row_text(1).starts_with(" Home"));
        assert!(!stack.handle_input(&InputEvent::key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_shutdown_exits_everything() {
        let mut stack = ScreenStack::new(AppContext::new().shared());
        let log = Log::default();
        let home = traced(&stack, "Home", &log);
        stack.push(home).unwrap();
        let detail = traced(&stack, "Detail", &log);
        stack.push(detail).unwrap();
        log.borrow_mut().clear();

        stack.shutdown();

        assert!(stack.is_empty());
        assert_eq!(*log.borrow(), vec!["exit Detail"]);
    }
}
