//! cellwin Demo
//!
//! Run with: cargo run -- [options]
//!
//! Options:
//!   --timeout <ms>     Input poll timeout (default: 5)
//!   --border <style>   single, double, rounded, heavy or ascii
//!
//! Opens three windows and a menu. One window bounces across the screen
//! dragging a child along; the menu moves the input window or reads text.
//! Ctrl+C or the Exit item quits.

use std::env;
use std::thread;
use std::time::Duration;

use log::{debug, info};

use cellwin::core::BorderStyle;
use cellwin::{read_input, Config, Delimiter, Menu, MenuArea, Terminal, WindowId, WindowManager};

const LABELS: [&str; 5] = ["1:", "2:", "3:", "4:", "Exit:"];
const DESCRIPTIONS: [&str; 5] = ["Choice 1", "Choice 2", "Choice 3", "Choice 4", "Exits the Program"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = Config::from_env()?;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--timeout" => {
                match args.get(i + 1).and_then(|v| v.parse::<u64>().ok()) {
                    Some(ms) => config.input_timeout_ms = ms,
                    None => {
                        eprintln!("Error: --timeout requires a number of milliseconds");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--border" => {
                match args.get(i + 1).and_then(|v| BorderStyle::from_name(v)) {
                    Some(style) => config.border = style,
                    None => {
                        eprintln!("Error: --border requires single, double, rounded, heavy or ascii");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--help" | "-h" => {
                println!("cellwin-demo v0.1.0");
                println!();
                println!("Usage: cellwin-demo [options]");
                println!();
                println!("Options:");
                println!("  --timeout <ms>    Input poll timeout (default: 5)");
                println!("  --border <style>  single, double, rounded, heavy or ascii");
                println!("  --help, -h        Show this help");
                println!();
                println!("Configuration may also be given as JSON in $CELLWIN_CONFIG.");
                std::process::exit(0);
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                std::process::exit(1);
            }
        }
    }

    let mut term = Terminal::init(&config)?;
    let mut wm = WindowManager::new(term.screen()?, config);

    let win1 = wm.create_window(0, 0, 10, 10, "My Window", None)?;
    wm.move_by(win1, 1, 0)?;
    let win2 = wm.create_window(0, 0, 10, 10, "Child Window", Some(win1))?;
    let win3 = wm.create_window(25, 10, 60, 20, "Input Window", None)?;

    let mut menu = Menu::new(&mut wm, win3, MenuArea::new(2, 2, 25, 6), &LABELS, &DESCRIPTIONS, "*")?;
    info!("Demo started on a {}x{} screen", wm.screen().cols(), wm.screen().rows());

    let mut dx = 1;
    loop {
        if let Some(event) = term.poll()? {
            if event.is_interrupt() {
                break;
            }
            if let cellwin::InputEvent::Resize { cols, rows } = event {
                debug!("Terminal resized to {}x{}", cols, rows);
            }

            match menu.update(&mut wm, &event)? {
                Some(0) => {
                    wm.move_by(win3, 0, 1)?;
                    menu.refresh(&mut wm)?;
                }
                Some(1) => {
                    wm.move_by(win3, 0, -1)?;
                    menu.refresh(&mut wm)?;
                }
                Some(2) => {
                    if let Some(word) = read_input(&mut wm, &mut term, win3, 2, 10, Some("Input: "), Delimiter::Whitespace)? {
                        wm.print(win3, 2, 11, &format!(">> {}", word))?;
                    }
                }
                Some(3) => {
                    if let Some(line) = read_input(&mut wm, &mut term, win3, 2, 12, Some("Line: "), Delimiter::Line { max: 255 })? {
                        wm.print(win3, 2, 13, &format!(">> {}", line))?;
                    }
                }
                Some(_) => break,
                None => {}
            }
        }

        dx = bounce(&mut wm, win1, win2, dx)?;
        thread::sleep(Duration::from_millis(10));
    }

    menu.destroy(&mut wm)?;
    for id in [win2, win3, win1] {
        wm.destroy(id)?;
    }
    wm.screen_mut().finish()?;
    term.cleanup()?;

    println!("Everything is OK.");
    Ok(())
}

/// Step `win` one column, turning around when it and its child would leave
/// the screen. Returns the direction for the next step.
fn bounce(wm: &mut WindowManager, win: WindowId, child: WindowId, dx: i32) -> cellwin::Result<i32> {
    let w = wm.window(win)?;
    let span = (w.cols() + wm.window(child)?.cols()) as i32;
    let right = wm.screen().cols() as i32 - span;
    let next = w.x() + dx;

    let dx = if next < 0 || next > right.max(0) { -dx } else { dx };
    wm.move_by(win, dx, 0)?;
    wm.refresh(child)?;
    Ok(dx)
}
