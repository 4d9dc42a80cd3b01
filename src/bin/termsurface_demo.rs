//! `termsurface_demo` - paints one frame of a toy editor to stdout.
//!
//! A tiny in-memory engine shows a few lines of text with a line-number
//! margin and a bookmark marker, overlaid by an autocompletion list (or a
//! call tip with `--call-tip`).
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin termsurface_demo
//! cargo run --bin termsurface_demo -- --size 60x12 --color 256
//! cargo run --bin termsurface_demo -- --call-tip
//! cargo run --bin termsurface_demo -- --verbose 2>log.txt
//! ```

use std::ffi::OsString;
use std::io;

use termsurface::marker::{LineMarker, MarkerSymbol};
use termsurface::surface::Surface;
use termsurface::{
    Adapter, AdapterOptions, ColorMode, Engine, Font, FontParameters, FontWeight, PRect, Platform,
    Point, Result, Rgba, is_tty, terminal_size,
};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "termsurface_demo - paint one frame of a toy editor

USAGE:
    termsurface_demo [OPTIONS]

OPTIONS:
    -h, --help          Print this help message and exit
    --size <WxH>        Grid size (default: terminal size, else 80x24)
    --color <MODE>      Color mode: truecolor, 256, 16, none (default: truecolor)
    --call-tip          Show a call tip instead of the completion list
    --verbose           Log debug events to stderr
";

#[derive(Clone, Copy, Debug)]
struct Config {
    size: Option<(i32, i32)>,
    color_mode: ColorMode,
    call_tip: bool,
    verbose: bool,
}

enum ParseResult {
    Config(Config),
    Help,
    Error(String),
}

impl Config {
    fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self {
            size: None,
            color_mode: ColorMode::TrueColor,
            call_tip: false,
            verbose: false,
        };
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();
            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,
                "--verbose" => config.verbose = true,
                "--call-tip" => config.call_tip = true,
                "--size" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--size requires a value (e.g., 80x24)".to_string());
                    };
                    let value = value.to_string_lossy().to_string();
                    match parse_size(&value) {
                        Some(size) => config.size = Some(size),
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --size: {value} (use WxH format, e.g., 80x24)"
                            ));
                        }
                    }
                }
                "--color" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--color requires a value".to_string());
                    };
                    config.color_mode = match value.to_string_lossy().as_ref() {
                        "truecolor" => ColorMode::TrueColor,
                        "256" => ColorMode::Color256,
                        "16" => ColorMode::Color16,
                        "none" => ColorMode::NoColor,
                        other => {
                            return ParseResult::Error(format!(
                                "Unknown --color: {other} (valid: truecolor, 256, 16, none)"
                            ));
                        }
                    };
                }
                other => return ParseResult::Error(format!("Unknown option: {other}")),
            }
        }

        ParseResult::Config(config)
    }
}

/// Parse a size string like "80x24" into (width, height).
fn parse_size(s: &str) -> Option<(i32, i32)> {
    let (w, h) = s.split_once('x')?;
    let w = w.parse::<i32>().ok()?;
    let h = h.parse::<i32>().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

// ============================================================================
// Toy Engine
// ============================================================================

const MARGIN: i32 = 5;
const BACKGROUND: Rgba = Rgba::from_rgb(0x18_18_18);
const MARGIN_BACKGROUND: Rgba = Rgba::from_rgb(0x28_28_28);
const TEXT: Rgba = Rgba::from_rgb(0xD8_D8_D8);

const SAMPLE: &[&str] = &[
    "fn main() {",
    "    let grid = CellGrid::new(80, 24);",
    "    let surface = CellSurface::attached(&mut grid, window);",
    "    // 漢字 take two columns, e\u{301} takes one",
    "    surface.fill_rectangle(rc, Rgba::BLACK);",
    "}",
];

/// A read-only view over a few lines of text.
#[derive(Debug)]
struct Scratchpad {
    lines: Vec<String>,
    top_line: i32,
    lines_on_screen: i32,
    caret: (i32, i32),
}

impl Scratchpad {
    fn new() -> Self {
        Self {
            lines: SAMPLE.iter().map(|line| (*line).to_string()).collect(),
            top_line: 0,
            lines_on_screen: 1,
            caret: (8, 1),
        }
    }

    fn line_count(&self) -> i32 {
        i32::try_from(self.lines.len()).unwrap_or(i32::MAX)
    }
}

impl Engine for Scratchpad {
    fn paint(&mut self, surface: &mut dyn Surface, rc: PRect) {
        surface.fill_rectangle(rc, BACKGROUND);
        surface.fill_rectangle(PRect::new(0.0, rc.top, f64::from(MARGIN), rc.bottom), MARGIN_BACKGROUND);

        let plain = Font::default();
        let bold = Font::new(&FontParameters::new(FontWeight::BOLD));
        let bookmark = LineMarker::new(MarkerSymbol::Bookmark, Rgba::from_rgb(0x7C_AF_C2), MARGIN_BACKGROUND);

        for row in 0..self.lines_on_screen {
            let line = self.top_line + row;
            let Some(text) = usize::try_from(line).ok().and_then(|i| self.lines.get(i)) else {
                break;
            };
            let top = f64::from(row);
            let number = format!("{:>3}", line + 1);
            surface.draw_text_no_clip(
                PRect::new(0.0, top, 3.0, top + 1.0),
                &plain,
                0.0,
                number.as_bytes(),
                TEXT,
                MARGIN_BACKGROUND,
            );
            if line == 1 {
                surface.draw_line_marker(PRect::new(3.0, top, 4.0, top + 1.0), &plain, &bookmark);
            }

            let text_rc = PRect::new(f64::from(MARGIN), top, rc.right, top + 1.0);
            surface.set_clip(text_rc);
            let font = if text.starts_with("fn") { &bold } else { &plain };
            surface.draw_text_clipped(text_rc, font, 0.0, text.as_bytes(), TEXT, BACKGROUND);
            surface.pop_clip();
        }
    }

    fn paint_call_tip(&mut self, surface: &mut dyn Surface, rc: PRect) {
        let text = b"new(width: i32, height: i32)";
        surface.draw_text_clipped(rc, &Font::default(), 0.0, text, Rgba::BLACK, Rgba::from_rgb(0xFF_FF_C6));
    }

    fn change_size(&mut self, platform: &mut Platform) {
        self.lines_on_screen = platform.window().height();
        tracing::debug!(lines = self.lines_on_screen, "scratchpad resized");
    }

    fn wnd_proc(&mut self, _platform: &mut Platform, msg: u32, _wparam: usize, _lparam: isize) -> Result<isize> {
        const GET_LINE_COUNT: u32 = 2154;
        match msg {
            GET_LINE_COUNT => Ok(self.line_count() as isize),
            _ => Ok(0),
        }
    }

    fn insert_character(&mut self, _platform: &mut Platform, _text: &[u8]) {}

    fn scroll_to(&mut self, _platform: &mut Platform, line: i32) {
        self.top_line = line.clamp(0, self.max_scroll_position());
    }

    fn horizontal_scroll_to(&mut self, _platform: &mut Platform, _x: i32) {}

    fn top_line(&self) -> i32 {
        self.top_line
    }

    fn max_scroll_position(&self) -> i32 {
        (self.line_count() - 1).max(0)
    }

    fn lines_on_screen(&self) -> i32 {
        self.lines_on_screen
    }

    fn scroll_width(&self) -> i32 {
        self.lines.iter().map(|l| l.len() as i32).max().unwrap_or(1) + MARGIN
    }

    fn caret_point(&self) -> Option<Point> {
        let (column, line) = self.caret;
        Some(Point::from_ints(MARGIN + column, line - self.top_line))
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> io::Result<()> {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => run(&config).map_err(|e| io::Error::other(e.to_string())),
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();

    let (width, height) = config.size.unwrap_or_else(|| {
        if is_tty(&io::stdout()) {
            terminal_size().map_or((80, 24), |(w, h)| (i32::from(w), i32::from(h)))
        } else {
            (80, 24)
        }
    });
    tracing::info!(width, height, color_mode = ?config.color_mode, "painting demo frame");

    let options = AdapterOptions::default().with_color_mode(config.color_mode);
    let mut adapter = Adapter::with_size(Scratchpad::new(), options, width, height);
    adapter.set_output(Box::new(io::stdout()));

    let platform = adapter.platform_mut();
    if config.call_tip {
        platform.open_call_tip(PRect::from_ints(MARGIN + 20, 2, MARGIN + 50, 3));
    } else {
        let list_box = platform.create_list_box();
        list_box.register_image(1, "ƒ");
        list_box.register_image(2, "τ");
        list_box.set_list("CellGrid?2 CellSurface?2 clear?1 clip?1 copy_to_clipboard?1", ' ', '?')?;
        platform.position_list_box(PRect::from_ints(13, 2, 33, 3));
        platform.select_list_item(1);
    }

    adapter.refresh()?;
    // Leave the shell prompt below the frame.
    println!();
    Ok(())
}
