//! htl - Hebrew transliteration helper CLI

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use hebrew_translit::{
    build_tiles, builtin_tile_count, find_tiles, plain_text, resolve_query,
    tile::uppercase_entries, Activation, BoardError, BoardOptions, CapabilityNotice,
    ClipboardCapability, ClipboardError, ClipboardPayload, FeedbackState, Host, SymbolBoard, Tile,
    TileId, TileKind, CONSONANTS, VOWELS,
};
#[cfg(feature = "cli")]
use log::debug;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::process::ExitCode;
#[cfg(feature = "cli")]
use std::time::Duration;
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "htl")]
#[command(version)]
#[command(about = "Hebrew transliteration helper - copy SBL transliteration characters", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List the transliteration table
    List {
        /// Only show one kind of symbol
        #[arg(short, long, value_enum)]
        kind: Option<KindFilter>,

        /// Print the raw markup instead of the visible text
        #[arg(long)]
        markup: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Find tiles by Hebrew symbol or transliteration
    Lookup {
        /// Symbol or transliteration
        query: String,
    },

    /// Copy a transliteration to the clipboard
    Copy {
        /// Hebrew symbol (or transliteration) to copy
        query: String,

        /// Which match to copy when the query matches several tiles
        #[arg(short = 'n', long)]
        variant: Option<usize>,

        /// Copy the uppercase form
        #[arg(short, long)]
        upper: bool,

        /// Copy plain text instead of italic HTML
        #[arg(short, long)]
        plain: bool,

        /// Write the clipboard payload to stdout instead
        #[arg(long)]
        print: bool,
    },

    /// Show version and table info
    Info,

    /// Keep the clipboard selection alive after `copy` exits (X11/Wayland)
    #[command(name = "hold-clipboard", hide = true)]
    HoldClipboard {
        /// Treat stdin as HTML (with a plain-text alternative)
        #[arg(long)]
        html: bool,
    },
}

/// Subcommand the `copy` process re-executes itself with on Linux
#[cfg(all(feature = "cli", any(target_os = "linux", test)))]
const HOLD_COMMAND: &str = "hold-clipboard";

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum KindFilter {
    /// Consonants only
    Consonant,
    /// Vowels only
    Vowel,
}

#[cfg(feature = "cli")]
impl KindFilter {
    fn accepts(self, kind: TileKind) -> bool {
        matches!(
            (self, kind),
            (KindFilter::Consonant, TileKind::Consonant) | (KindFilter::Vowel, TileKind::Vowel)
        )
    }
}

/// Host for the terminal: system clipboard (or stdout) and stderr feedback
#[cfg(feature = "cli")]
struct TerminalHost {
    print: bool,
}

#[cfg(feature = "cli")]
impl Host for TerminalHost {
    fn clipboard_capability(&self) -> ClipboardCapability {
        // arboard writes HTML with a plain-text alternative on every platform
        ClipboardCapability::Rich
    }

    fn show_capability_notice(&self, notice: &CapabilityNotice) {
        eprintln!("⚠ {}", plain_text(notice.html));
    }

    fn mount_tile(&self, _tile: &Tile) {}

    async fn write_clipboard(&self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        if self.print {
            let mut stdout = io::stdout();
            return writeln!(stdout, "{}", payload.content())
                .map_err(clipboard_error);
        }

        write_system_clipboard(payload)
    }

    fn render_feedback(&self, tile: TileId, state: FeedbackState) {
        debug!("tile {}: {:?}", tile, state);
        if !state.label().is_empty() && !self.print {
            eprintln!("{}", state.label());
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("⚠ {}", message);
    }

    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(feature = "cli")]
fn clipboard_error(err: impl std::fmt::Display) -> ClipboardError {
    ClipboardError::new(err.to_string())
}

/// Set the clipboard in-process; the content outlives the process on these
/// platforms.
#[cfg(all(feature = "cli", not(target_os = "linux")))]
fn write_system_clipboard(payload: &ClipboardPayload) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(clipboard_error)?;
    let result = match payload {
        ClipboardPayload::Html(html) => {
            let alt = payload.alt_text();
            clipboard.set_html(html.as_str(), Some(alt.as_str()))
        }
        ClipboardPayload::Text(text) => clipboard.set_text(text.as_str()),
    };
    result.map_err(clipboard_error)
}

/// On X11/Wayland the selection dies with its owner, so a detached copy of
/// this binary takes ownership and serves it until another program replaces
/// it.
#[cfg(all(feature = "cli", target_os = "linux"))]
fn write_system_clipboard(payload: &ClipboardPayload) -> Result<(), ClipboardError> {
    use std::process::{Command, Stdio};

    // Report a missing display here instead of from the detached child
    drop(arboard::Clipboard::new().map_err(clipboard_error)?);

    let exe = std::env::current_exe().map_err(clipboard_error)?;
    let mut child = Command::new(exe)
        .args(holder_args(payload))
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .current_dir("/")
        .spawn()
        .map_err(clipboard_error)?;
    debug!("clipboard holder started (pid {})", child.id());

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(payload.content().as_bytes())
            .map_err(clipboard_error)?;
    }
    Ok(())
}

/// Arguments for the holder process; the payload content goes over stdin
#[cfg(all(feature = "cli", any(target_os = "linux", test)))]
fn holder_args(payload: &ClipboardPayload) -> Vec<&'static str> {
    match payload {
        ClipboardPayload::Html(_) => vec![HOLD_COMMAND, "--html"],
        ClipboardPayload::Text(_) => vec![HOLD_COMMAND],
    }
}

/// Own the selection until another program takes it over.
#[cfg(all(feature = "cli", target_os = "linux"))]
fn hold_clipboard(payload: &ClipboardPayload) -> Result<(), ClipboardError> {
    use arboard::SetExtLinux;

    let mut clipboard = arboard::Clipboard::new().map_err(clipboard_error)?;
    let set = clipboard.set().wait();
    let result = match payload {
        ClipboardPayload::Html(html) => {
            let alt = payload.alt_text();
            set.html(html.as_str(), Some(alt.as_str()))
        }
        ClipboardPayload::Text(text) => set.text(text.as_str()),
    };
    result.map_err(clipboard_error)
}

#[cfg(all(feature = "cli", not(target_os = "linux")))]
fn hold_clipboard(payload: &ClipboardPayload) -> Result<(), ClipboardError> {
    write_system_clipboard(payload)
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Also bridges `log` records from the library
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn run(command: Commands) -> Result<ExitCode, BoardError> {
    match command {
        Commands::List { kind, markup, json } => {
            let tiles: Vec<Tile> = build_tiles()
                .into_iter()
                .filter(|t| kind.map_or(true, |k| k.accepts(t.kind)))
                .collect();
            if json {
                match serde_json::to_string_pretty(&tiles) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            } else {
                for tile in &tiles {
                    print_tile(tile, markup);
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Lookup { query } => {
            let tiles = build_tiles();
            let found = find_tiles(&tiles, &query);
            if found.is_empty() {
                return Err(BoardError::unknown_symbol(query));
            }
            for tile in found {
                print_tile(tile, false);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Copy {
            query,
            variant,
            upper,
            plain,
            print,
        } => {
            let tiles = build_tiles();
            let (tile, matched) = match resolve_query(&tiles, &query, variant) {
                Ok(resolved) => resolved,
                Err(err @ BoardError::AmbiguousQuery { .. }) => {
                    eprintln!("{}:", err);
                    for (index, tile) in find_tiles(&tiles, &query).into_iter().enumerate() {
                        eprintln!("  -n {}  {}", index, format_tile(tile, false));
                    }
                    return Ok(ExitCode::FAILURE);
                }
                Err(err) => return Err(err),
            };
            let options = BoardOptions {
                force_plain_text: plain,
                feedback_delay: Duration::ZERO,
                ..BoardOptions::default()
            };
            let board = SymbolBoard::new(TerminalHost { print }, options);
            let activation = if upper { Activation::Double } else { matched };

            match futures::executor::block_on(board.activate(tile.id, activation)) {
                Ok(FeedbackState::Success) => Ok(ExitCode::SUCCESS),
                Ok(_) => Ok(ExitCode::FAILURE),
                // Already reported through the host
                Err(BoardError::NoUppercaseVariant { .. }) => Ok(ExitCode::FAILURE),
                Err(err) => Err(err),
            }
        }

        Commands::Info => {
            println!("htl - Hebrew transliteration helper");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Table:");
            println!("  {} consonants", CONSONANTS.len());
            println!("  {} vowel signs", VOWELS.len());
            println!("  {} tiles", builtin_tile_count());
            println!("  {} uppercase forms", uppercase_entries());
            println!();
            println!("Single activation copies the transliteration, --upper the uppercase form.");
            println!();
            Ok(ExitCode::SUCCESS)
        }

        Commands::HoldClipboard { html } => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(clipboard_error)?;
            let payload = if html {
                ClipboardPayload::Html(content)
            } else {
                ClipboardPayload::Text(content)
            };
            hold_clipboard(&payload)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(feature = "cli")]
fn print_tile(tile: &Tile, markup: bool) {
    println!("{}", format_tile(tile, markup));
}

#[cfg(feature = "cli")]
fn format_tile(tile: &Tile, markup: bool) -> String {
    let render = |s: &str| {
        if markup {
            s.to_string()
        } else {
            plain_text(s)
        }
    };
    let upper = tile.uppercase.map(render).unwrap_or_else(|| "-".to_string());
    format!(
        "{:>3}  {:<9}  {}\t{}\t{}",
        tile.id,
        tile.kind,
        tile.symbol,
        render(tile.transliteration),
        upper
    )
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install hebrew-translit --features cli");
    eprintln!("  htl <COMMAND>");
}
