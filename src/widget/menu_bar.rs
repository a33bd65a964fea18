//! Menu Bar Widget: top-row menus with keyboard navigation.
//!
//! The bar is inactive until the composer activates it (open-menu key or an
//! Alt+letter shortcut). While active it consumes every key: arrows move
//! between menus and items, Enter chooses, Esc closes the dropdown and then
//! deactivates. Chosen items queue their action id for the screen to drain
//! with [`MenuBar::take_actions`].

use tracing::debug;

use super::traits::{fill_background, fit_width, text_width, Widget};
use crate::buffer::Modifiers;
use crate::error::DrawError;
use crate::input::{InputEvent, KeyCode, KeyModifiers};
use crate::layout::Rect;
use crate::surface::{BorderStyle, CompositionSurface};
use crate::theme::{props, ThemeResolver};

/// An entry in a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    label: String,
    action: String,
}

impl MenuItem {
    /// Create an item that queues `action` when chosen.
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Action id.
    pub fn action(&self) -> &str {
        &self.action
    }

    fn hotkey(&self) -> Option<char> {
        first_alphanumeric(&self.label)
    }
}

/// A titled dropdown of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    hotkey: Option<char>,
    items: Vec<MenuItem>,
}

impl Menu {
    /// Create a menu. The hotkey defaults to the first letter or digit of the title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let hotkey = first_alphanumeric(&title);
        Self {
            title,
            hotkey,
            items: Vec::new(),
        }
    }

    /// Override the hotkey.
    #[must_use]
    pub fn with_hotkey(mut self, hotkey: char) -> Self {
        self.hotkey = Some(hotkey.to_ascii_lowercase());
        self
    }

    /// Append an item.
    #[must_use]
    pub fn item(mut self, label: impl Into<String>, action: impl Into<String>) -> Self {
        self.items.push(MenuItem::new(label, action));
        self
    }

    /// Title shown in the bar.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The shortcut letter.
    pub const fn hotkey(&self) -> Option<char> {
        self.hotkey
    }

    /// Dropdown items.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

fn first_alphanumeric(text: &str) -> Option<char> {
    text.chars().find(|c| c.is_alphanumeric()).map(|c| c.to_ascii_lowercase())
}

/// The application menu bar.
#[derive(Debug, Default)]
pub struct MenuBar {
    menus: Vec<Menu>,
    bounds: Rect,
    active: bool,
    open: bool,
    selected: usize,
    highlighted: usize,
    actions: Vec<String>,
}

impl MenuBar {
    /// Create an empty menu bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a menu.
    pub fn add_menu(&mut self, menu: Menu) {
        self.menus.push(menu);
    }

    /// All menus.
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Whether the bar has keyboard focus.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a dropdown is showing.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the selected menu.
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the highlighted item in the open dropdown.
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Give the bar keyboard focus with the first menu selected.
    ///
    /// A bar without menus stays inactive.
    pub fn activate(&mut self) -> bool {
        if self.menus.is_empty() {
            return false;
        }
        self.active = true;
        self.open = false;
        self.selected = 0;
        self.highlighted = 0;
        true
    }

    /// Drop keyboard focus and close any dropdown.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.open = false;
    }

    /// Activate and open the menu whose hotkey is `key`.
    pub fn open_shortcut(&mut self, key: char) -> bool {
        let key = key.to_ascii_lowercase();
        let Some(index) = self.menus.iter().position(|menu| menu.hotkey == Some(key)) else {
            return false;
        };
        self.active = true;
        self.open_menu(index);
        true
    }

    /// Drain the action ids chosen since the last call.
    pub fn take_actions(&mut self) -> Vec<String> {
        std::mem::take(&mut self.actions)
    }

    /// Column and width of each title in the bar.
    pub fn title_spans(&self) -> Vec<(u16, u16)> {
        let mut x = self.bounds.x.saturating_add(1);
        self.menus
            .iter()
            .map(|menu| {
                let width = text_width(&menu.title).saturating_add(2);
                let span = (x, width);
                x = x.saturating_add(width);
                span
            })
            .collect()
    }

    /// Area of the open dropdown, border included.
    pub fn dropdown_rect(&self) -> Option<Rect> {
        if !self.open {
            return None;
        }
        let menu = self.menus.get(self.selected)?;
        let (x, title_width) = self.title_spans().get(self.selected).copied()?;
        let widest = menu.items.iter().map(|item| text_width(&item.label)).max().unwrap_or(0);
        let width = widest.saturating_add(4).max(title_width);
        let height = u16::try_from(menu.items.len()).unwrap_or(u16::MAX).saturating_add(2);
        Some(Rect::new(x, self.bounds.y.saturating_add(1), width, height))
    }

    fn open_menu(&mut self, index: usize) {
        self.selected = index;
        self.open = true;
        self.highlighted = 0;
    }

    fn step_menu(&mut self, forward: bool) {
        let count = self.menus.len();
        self.selected = if forward {
            (self.selected + 1) % count
        } else {
            (self.selected + count - 1) % count
        };
        self.highlighted = 0;
    }

    fn step_item(&mut self, forward: bool) {
        let count = self.menus.get(self.selected).map_or(0, |menu| menu.items.len());
        if count == 0 {
            return;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % count
        } else {
            (self.highlighted + count - 1) % count
        };
    }

    fn choose(&mut self, index: usize) {
        let Some(item) = self.menus.get(self.selected).and_then(|menu| menu.items.get(index)) else {
            return;
        };
        debug!(action = item.action.as_str(), "menu item chosen");
        self.actions.push(item.action.clone());
        self.deactivate();
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.step_menu(false),
            KeyCode::Right => self.step_menu(true),
            KeyCode::Down if self.open => self.step_item(true),
            KeyCode::Up if self.open => self.step_item(false),
            KeyCode::Down | KeyCode::Enter if !self.open => self.open_menu(self.selected),
            KeyCode::Enter => self.choose(self.highlighted),
            KeyCode::Esc if self.open => self.open = false,
            KeyCode::Esc | KeyCode::F(10) => self.deactivate(),
            KeyCode::Char(c) if self.open => {
                let c = c.to_ascii_lowercase();
                let items = self.menus.get(self.selected).map_or(&[][..], |menu| &menu.items[..]);
                if let Some(index) = items.iter().position(|item| item.hotkey() == Some(c)) {
                    self.choose(index);
                }
            }
            KeyCode::Char(c) => {
                self.open_shortcut(c);
            }
            _ => {}
        }
    }

    fn draw_dropdown(&self, surface: &mut dyn CompositionSurface, theme: &ThemeResolver) {
        let (Some(rect), Some(menu)) = (self.dropdown_rect(), self.menus.get(self.selected)) else {
            return;
        };
        fill_background(surface, rect, theme, props::MENU_BG);
        surface.draw_box(rect, BorderStyle::Single, theme.resolve_foreground(props::MENU_BORDER), None);

        let inner = rect.shrink(1);
        let item_fg = theme.resolve_foreground(props::MENU_FG);
        let selected_fg = theme.resolve_foreground(props::MENU_SELECTED_FG);
        let selected_bg = theme.resolve_background(props::MENU_SELECTED_BG, 1, 0);
        for (row, (index, item)) in (inner.y..inner.bottom()).zip(menu.items.iter().enumerate()) {
            let label = fit_width(&item.label, inner.width.saturating_sub(2));
            if index == self.highlighted {
                surface.fill_rect(Rect::new(inner.x, row, inner.width, 1), ' ', None, selected_bg);
                surface.set_modifiers(Modifiers::BOLD);
                surface.write_text(inner.x + 1, row, label, selected_fg, selected_bg);
                surface.set_modifiers(Modifiers::empty());
            } else {
                surface.write_text(inner.x + 1, row, label, item_fg, None);
            }
        }
    }
}

impl Widget for MenuBar {
    fn name(&self) -> &str {
        "MenuBar"
    }

    fn desired_size(&self) -> (u16, u16) {
        (0, 1)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn draw(&self, surface: &mut dyn CompositionSurface, theme: &ThemeResolver) -> Result<(), DrawError> {
        let area = self.bounds;
        if area.is_empty() {
            return Ok(());
        }
        fill_background(surface, area, theme, props::MENU_BAR_BG);

        let bar_fg = theme.resolve_foreground(props::MENU_BAR_FG);
        let hotkey_fg = theme.resolve_foreground(props::MENU_BAR_HOTKEY);
        let selected_fg = theme.resolve_foreground(props::MENU_SELECTED_FG);
        let selected_bg = theme.resolve_background(props::MENU_SELECTED_BG, 1, 0);

        for (index, (menu, (x, width))) in self.menus.iter().zip(self.title_spans()).enumerate() {
            if x.saturating_add(width) > area.right() {
                break;
            }
            let is_selected = self.active && index == self.selected;
            let (fg, bg) = if is_selected { (selected_fg, selected_bg) } else { (bar_fg, None) };
            surface.write_text(x, area.y, &format!(" {} ", menu.title), fg, bg);

            if let Some(hotkey) = menu.hotkey.filter(|_| !is_selected) {
                let mut col = x + 1;
                for ch in menu.title.chars() {
                    if ch.to_ascii_lowercase() == hotkey {
                        surface.set_modifiers(Modifiers::UNDERLINE);
                        surface.write_text(col, area.y, ch.encode_utf8(&mut [0; 4]), hotkey_fg, None);
                        surface.set_modifiers(Modifiers::empty());
                        break;
                    }
                    col = col.saturating_add(text_width(ch.encode_utf8(&mut [0; 4])));
                }
            }
        }

        self.draw_dropdown(surface, theme);
        Ok(())
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.active {
            return false;
        }
        match event {
            InputEvent::Key { code, modifiers } => {
                if *modifiers == KeyModifiers::NONE || *modifiers == KeyModifiers::ALT {
                    self.handle_key(*code);
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BufferSurface;

    fn bar() -> MenuBar {
        let mut bar = MenuBar::new();
        bar.add_menu(Menu::new("File").item("New task", "task.new").item("Quit", "app.quit"));
        bar.add_menu(Menu::new("View").item("Timeline", "view.timeline"));
        bar.set_bounds(Rect::new(0, 0, 40, 1));
        bar
    }

    fn press(bar: &mut MenuBar, code: KeyCode) -> bool {
        bar.handle_input(&InputEvent::key(code))
    }

    #[test]
    fn test_inactive_bar_ignores_keys() {
        let mut bar = bar();
        assert!(!press(&mut bar, KeyCode::Down));
        assert!(!bar.is_open());
    }

    #[test]
    fn test_navigate_and_choose() {
        let mut bar = bar();
        assert!(bar.activate());
        assert!(press(&mut bar, KeyCode::Enter));
        assert!(bar.is_open());
        press(&mut bar, KeyCode::Down);
        assert_eq!(bar.highlighted(), 1);
        press(&mut bar, KeyCode::Enter);

        assert!(!bar.is_active());
        assert_eq!(bar.take_actions(), vec!["app.quit".to_string()]);
        assert!(bar.take_actions().is_empty());
    }

    #[test]
    fn test_left_right_wrap() {
        let mut bar = bar();
        bar.activate();
        press(&mut bar, KeyCode::Left);
        assert_eq!(bar.selected(), 1);
        press(&mut bar, KeyCode::Right);
        assert_eq!(bar.selected(), 0);
    }

    #[test]
    fn test_escape_closes_then_deactivates() {
        let mut bar = bar();
        assert!(bar.open_shortcut('V'));
        assert_eq!(bar.selected(), 1);
        assert!(bar.is_open());

        press(&mut bar, KeyCode::Esc);
        assert!(bar.is_active());
        assert!(!bar.is_open());
        press(&mut bar, KeyCode::Esc);
        assert!(!bar.is_active());
    }

    #[test]
    fn test_item_hotkey_in_open_menu() {
        let mut bar = bar();
        bar.open_shortcut('f');
        press(&mut bar, KeyCode::Char('n'));
        assert_eq!(bar.take_actions(), vec!["task.new".to_string()]);
    }

    #[test]
    fn test_activate_without_menus() {
        let mut bar = MenuBar::new();
        assert!(!bar.activate());
        assert!(!bar.open_shortcut('f'));
    }

    #[test]
    fn test_draw_titles_and_dropdown() {
        let theme = ThemeResolver::with_defaults();
        let mut surface = BufferSurface::new(40, 6);
        let mut bar = bar();
        bar.open_shortcut('f');

        bar.draw(&mut surface, &theme).unwrap();

        assert!(surface.row_text(0).starts_with("  File  View "));
        assert_eq!(bar.dropdown_rect(), Some(Rect::new(1, 1, 12, 4)));
        assert!(surface.row_text(1).starts_with(" ┌──────────┐"));
        assert!(surface.row_text(2).starts_with(" │ New task │"));
        assert_eq!(
            Some(surface.cell(3, 2).unwrap().bg()),
            theme.resolve_background(props::MENU_SELECTED_BG, 1, 0)
        );
        assert_eq!(surface.cell(3, 2).unwrap().modifiers(), Modifiers::BOLD);
        assert_eq!(surface.cell(3, 3).unwrap().modifiers(), Modifiers::empty());
        assert_eq!(surface.cell(8, 0).unwrap().modifiers(), Modifiers::UNDERLINE);
        assert_eq!(surface.cell(9, 0).unwrap().modifiers(), Modifiers::empty());
    }
}
