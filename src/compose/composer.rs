//! `ScreenComposer`: the composition root of one screen.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error};

use super::context::{ComposerConfig, SharedContext};
use crate::buffer::Modifiers;
use crate::error::{DrawError, LayoutError};
use crate::input::InputEvent;
use crate::layout::{regions, Rect};
use crate::surface::{layers, CompositionSurface};
use crate::theme::ThemeResolver;
use crate::widget::{fill_background, fit_width, Footer, Header, MenuBar, StatusBar, Widget};

/// Handle to a content widget registered with a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

type Hook = Box<dyn FnMut(&mut ScreenComposer)>;
type Fallback = Box<dyn FnMut(&InputEvent) -> bool>;

/// Owns a screen's chrome and content widgets, lays them out, draws them
/// in z-order and routes input to them.
///
/// Draw order is fixed: header, content background, content widgets in
/// registration order, footer, status bar, and finally the menu bar with
/// its dropdown on the overlay layer. Each of these is fault-isolated: an
/// error or a panic while drawing one leaves an error marker in its area
/// and the rest of the screen still draws.
///
/// Input is offered to the active menu bar, then the open-menu key, then
/// content widgets newest first, then menu shortcuts, then the fallback
/// handler. The first one to consume the event ends the chain.
pub struct ScreenComposer {
    title: String,
    context: SharedContext,
    config: ComposerConfig,
    menu_bar: MenuBar,
    header: Header,
    footer: Footer,
    status_bar: StatusBar,
    content: Vec<(WidgetId, Box<dyn Widget>)>,
    next_id: u64,
    content_area: Rect,
    size: Option<(u16, u16)>,
    active: bool,
    on_enter: Option<Hook>,
    on_exit: Option<Hook>,
    fallback: Option<Fallback>,
}

impl fmt::Debug for ScreenComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenComposer")
            .field("title", &self.title)
            .field("content", &self.content.len())
            .field("content_area", &self.content_area)
            .field("size", &self.size)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl ScreenComposer {
    /// Create a screen titled `title` over a shared context.
    pub fn new(title: impl Into<String>, context: SharedContext) -> Self {
        Self::with_config(title, context, ComposerConfig::default())
    }

    /// Create a screen with custom composer settings.
    pub fn with_config(title: impl Into<String>, context: SharedContext, config: ComposerConfig) -> Self {
        let title = title.into();
        Self {
            header: Header::new(title.clone()),
            title,
            context,
            config,
            menu_bar: MenuBar::new(),
            footer: Footer::new(),
            status_bar: StatusBar::new(),
            content: Vec::new(),
            next_id: 0,
            content_area: Rect::ZERO,
            size: None,
            active: false,
            on_enter: None,
            on_exit: None,
            fallback: None,
        }
    }

    /// Screen title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The shared context.
    pub const fn context(&self) -> &SharedContext {
        &self.context
    }

    /// Whether the screen is entered and not yet exited.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Size from the last successful [`ScreenComposer::resize`].
    pub const fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Area content widgets are arranged in.
    pub const fn content_area(&self) -> Rect {
        self.content_area
    }

    /// The menu bar.
    pub const fn menu_bar(&self) -> &MenuBar {
        &self.menu_bar
    }

    /// The menu bar, for adding menus.
    pub fn menu_bar_mut(&mut self) -> &mut MenuBar {
        &mut self.menu_bar
    }

    /// The header.
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// The header, for changing the title or breadcrumb.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// The footer.
    pub const fn footer(&self) -> &Footer {
        &self.footer
    }

    /// The footer, for changing key hints.
    pub fn footer_mut(&mut self) -> &mut Footer {
        &mut self.footer
    }

    /// The status bar.
    pub const fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    /// The status bar, for changing its sections.
    pub fn status_bar_mut(&mut self) -> &mut StatusBar {
        &mut self.status_bar
    }

    /// Run `hook` every time the screen is entered.
    pub fn set_on_enter(&mut self, hook: impl FnMut(&mut Self) + 'static) {
        self.on_enter = Some(Box::new(hook));
    }

    /// Run `hook` every time the screen is exited.
    pub fn set_on_exit(&mut self, hook: impl FnMut(&mut Self) + 'static) {
        self.on_exit = Some(Box::new(hook));
    }

    /// Last handler for events nothing else consumed.
    pub fn set_fallback(&mut self, handler: impl FnMut(&InputEvent) -> bool + 'static) {
        self.fallback = Some(Box::new(handler));
    }

    /// Register a content widget on top of the existing ones.
    ///
    /// The widget is arranged right away if the screen has a size.
    pub fn add_content_widget(&mut self, mut widget: Box<dyn Widget>) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        if self.size.is_some() {
            widget.arrange(self.content_area);
        }
        self.content.push((id, widget));
        id
    }

    /// Unregister a content widget, handing it back.
    pub fn remove_content_widget(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.content.iter().position(|(wid, _)| *wid == id)?;
        Some(self.content.remove(index).1)
    }

    /// A registered content widget.
    pub fn content_widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.content.iter().find(|(wid, _)| *wid == id).map(|(_, widget)| widget.as_ref())
    }

    /// A registered content widget, mutably.
    pub fn content_widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        for (wid, widget) in &mut self.content {
            if *wid == id {
                return Some(widget.as_mut());
            }
        }
        None
    }

    /// Number of content widgets.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Drain the menu actions chosen since the last call.
    pub fn take_menu_actions(&mut self) -> Vec<String> {
        self.menu_bar.take_actions()
    }

    /// Mark the screen active and run the enter hook.
    ///
    /// Entering an active screen does nothing.
    pub fn on_enter(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        debug!(screen = self.title.as_str(), "screen entered");
        if let Some(mut hook) = self.on_enter.take() {
            hook(self);
            if self.on_enter.is_none() {
                self.on_enter = Some(hook);
            }
        }
    }

    /// Mark the screen inactive, close the menu bar and run the exit hook.
    ///
    /// Exiting an inactive screen does nothing.
    pub fn on_exit(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.menu_bar.deactivate();
        debug!(screen = self.title.as_str(), "screen exited");
        if let Some(mut hook) = self.on_exit.take() {
            hook(self);
            if self.on_exit.is_none() {
                self.on_exit = Some(hook);
            }
        }
    }

    /// Lay every contributor out for a `width` x `height` terminal.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnknownRegion`] if one of the standard regions
    /// was removed from the context's layout. The screen keeps its previous
    /// layout in that case.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), LayoutError> {
        let (menu, header, content, footer, status) = {
            let context = self.context.borrow();
            let layout = &context.regions;
            (
                layout.region(regions::MENU_BAR, width, height)?,
                layout.region(regions::HEADER, width, height)?,
                layout.region(regions::CONTENT, width, height)?,
                layout.region(regions::FOOTER, width, height)?,
                layout.region(regions::STATUS_BAR, width, height)?,
            )
        };

        self.menu_bar.set_bounds(menu);
        self.header.set_bounds(header);
        self.footer.set_bounds(footer);
        self.status_bar.set_bounds(status);
        self.content_area = content;
        for (_, widget) in &mut self.content {
            widget.arrange(content);
        }
        self.size = Some((width, height));
        debug!(screen = self.title.as_str(), width, height, "screen resized");
        Ok(())
    }

    /// Draw the whole screen as a fresh frame.
    ///
    /// The output depends only on current state, never on earlier frames.
    pub fn render(&self, surface: &mut dyn CompositionSurface) {
        let context = self.context.borrow();
        let theme = &context.theme;

        surface.begin_frame();
        surface.begin_layer(layers::BASE);
        self.draw_isolated(surface, theme, regions::HEADER, &self.header);

        surface.declare_region(regions::CONTENT, self.content_area, Some(layers::BASE));
        fill_background(surface, self.content_area, theme, &self.config.content_bg);

        surface.begin_layer(layers::CONTENT);
        for (id, widget) in &self.content {
            let label = format!("{}#{}", widget.name(), id.0);
            self.draw_isolated(surface, theme, &label, widget.as_ref());
        }

        surface.begin_layer(layers::CHROME);
        self.draw_isolated(surface, theme, regions::FOOTER, &self.footer);
        self.draw_isolated(surface, theme, regions::STATUS_BAR, &self.status_bar);

        surface.begin_layer(layers::OVERLAY);
        self.draw_isolated(surface, theme, regions::MENU_BAR, &self.menu_bar);
    }

    /// Route an input event. Returns whether something consumed it.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if self.menu_bar.is_active() && self.menu_bar.handle_input(event) {
            return true;
        }

        let keymap = self.context.borrow().keymap;
        if keymap.is_open_menu(event) && self.menu_bar.activate() {
            return true;
        }

        if self.content.iter_mut().rev().any(|(_, widget)| widget.handle_input(event)) {
            return true;
        }

        if let Some(letter) = keymap.shortcut_letter(event) {
            if self.menu_bar.open_shortcut(letter) {
                return true;
            }
        }

        self.fallback.as_mut().is_some_and(|fallback| fallback(event))
    }

    fn draw_isolated(&self, surface: &mut dyn CompositionSurface, theme: &ThemeResolver, label: &str, widget: &dyn Widget) {
        let area = widget.bounds();
        let layer = surface.layer();
        surface.declare_region(label, area, Some(layer));
        surface.set_modifiers(Modifiers::empty());

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| widget.draw(&mut *surface, theme)))
            .unwrap_or_else(|payload| Err(DrawError::Panicked(panic_message(payload.as_ref()))));

        if let Err(err) = outcome {
            error!(screen = self.title.as_str(), contributor = label, error = %err, "render failed");
            surface.begin_layer(layer);
            surface.set_modifiers(Modifiers::empty());
            self.draw_error_marker(surface, theme, label, area, &err);
        }
    }

    fn draw_error_marker(
        &self,
        surface: &mut dyn CompositionSurface,
        theme: &ThemeResolver,
        label: &str,
        area: Rect,
        err: &DrawError,
    ) {
        if area.is_empty() {
            return;
        }
        let marker = format!("[render error: {label}: {err}]");
        surface.write_text(
            area.x,
            area.y,
            fit_width(&marker, area.width),
            theme.resolve_foreground(&self.config.error_fg),
            theme.resolve_background(&self.config.error_bg, 1, 0),
        );
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
