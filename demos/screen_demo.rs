//! Screen demo: compose a task screen in memory and print it.
//!
//! Run with `RUST_LOG=trellis=debug cargo run --example screen_demo` to see
//! layout resolution and theme cache activity on stderr.

use crossterm::event::{Event, KeyCode as CtKeyCode, KeyEvent, KeyModifiers as CtKeyModifiers};
use tracing_subscriber::EnvFilter;
use trellis::compose::{AppContext, ScreenComposer, ScreenStack};
use trellis::layout::{CrossAxisAlignment, RegionSpec};
use trellis::surface::BufferSurface;
use trellis::widget::{Header, Menu, StackPanel, StatusBar};
use trellis::{InputEvent, StackConfig, ThemeConfig};

const THEME: &str = r##"
[palette]
teal = "#005f5f"
night = "#121212"

[properties]
"Content.Background" = "night"
"Header.Background" = { gradient = "horizontal", stops = [
    { at = 0.0, color = "teal" },
    { at = 1.0, color = "night" },
] }
"##;

const WIDTH: u16 = 72;
const HEIGHT: u16 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let mut context = AppContext::new();
    context.theme.apply(&ThemeConfig::from_toml_str(THEME)?);
    context.regions.define_region("Banner", RegionSpec::new("CENTER", "CENTER", 30, 1));
    let banner = context.regions.region("Banner", WIDTH, HEIGHT)?;

    let mut stack = ScreenStack::new(context.shared());
    stack.resize(WIDTH, HEIGHT)?;

    let mut today = ScreenComposer::new("Today", stack.context().clone());
    today.header_mut().set_breadcrumb(["Home", "Tasks"]);
    today.header_mut().set_info("Sat 18 Oct");
    today.menu_bar_mut().add_menu(
        Menu::new("File")
            .item("New task", "task.new")
            .item("Quit", "app.quit"),
    );
    today.menu_bar_mut().add_menu(Menu::new("View").item("Timeline", "view.timeline"));
    today.footer_mut().push_hint("F10", "Menu");
    today.footer_mut().push_hint("Alt+F", "File");
    today.status_bar_mut().set_all("3 tasks", "tracking", "01:24");

    let mut tasks = StackPanel::new(StackConfig::vertical().with_spacing(1).with_cross_align(CrossAxisAlignment::Start));
    for (name, elapsed) in [("Write report", "00:45"), ("Review budget", "00:30"), ("Plan sprint", "00:09")] {
        let mut row = StatusBar::new();
        row.set_all(name, "", elapsed);
        tasks.push(Box::new(row));
    }
    today.add_content_widget(Box::new(tasks));
    stack.push(today)?;

    let mut surface = BufferSurface::new(WIDTH, HEIGHT);
    stack.render(&mut surface);
    print_surface("initial", &surface);

    // Alt+F as the terminal would deliver it.
    let alt_f = Event::Key(KeyEvent::new(CtKeyCode::Char('f'), CtKeyModifiers::ALT));
    if let Some(event) = InputEvent::from_crossterm(alt_f) {
        stack.handle_input(&event);
    }
    stack.render(&mut surface);
    print_surface("file menu open", &surface);

    for key in [CtKeyCode::Down, CtKeyCode::Enter] {
        if let Some(event) = InputEvent::from_crossterm(Event::Key(KeyEvent::from(key))) {
            stack.handle_input(&event);
        }
    }
    if let Some(screen) = stack.top_mut() {
        println!("menu actions: {:?}", screen.take_menu_actions());
    }

    let mut about = ScreenComposer::new("About", stack.context().clone());
    about.add_content_widget(Box::new(Header::new("trellis demo")));
    stack.push(about)?;
    stack.render(&mut surface);
    print_surface("about screen", &surface);
    println!("centered banner region: {banner:?}");

    stack.shutdown();
    Ok(())
}

fn print_surface(label: &str, surface: &BufferSurface) {
    println!("--- {label} ---");
    for y in 0..surface.buffer().height() {
        println!("|{}|", surface.row_text(y));
    }
}
