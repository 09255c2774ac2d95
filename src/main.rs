//! Interactive transcript viewer.
//!
//! Renders a demo conversation and wires terminal input through the gesture
//! surface: click a link to open it, press and hold a message to copy it
//! (and, for your own messages, to flag them for deletion). The viewer is
//! the observer for surface actions; the library performs no I/O itself.

use clap::Parser;
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::error::Error;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use linkview::core::config::Config;
use linkview::core::message::{Message, MessageRole};
use linkview::link::detect::UrlDetector;
use linkview::link::segment::LinkMatch;
use linkview::ui::hyperlink;
use linkview::ui::layout::TextLayout;
use linkview::ui::render::render_text;
use linkview::ui::surface::{
    long_press_actions, tap_action, CopyKind, Gesture, GestureRecognizer, SurfaceAction,
};
use linkview::ui::theme::Theme;
use linkview::utils::{clipboard, launcher};

#[derive(Parser)]
#[command(name = "linkview")]
#[command(about = "A terminal transcript viewer with clickable, auto-detected links")]
#[command(long_about = "Linkview renders a chat transcript and detects URLs in message \
text as it draws.\n\n\
Controls:\n\
  Click             Open the link under the cursor\n\
  Press and hold    Copy the message (own messages can then be deleted)\n\
  Up/Down/Wheel     Scroll the transcript\n\
  d / Esc           Confirm or dismiss a pending deletion\n\
  q / Ctrl+C        Quit")]
struct Args {
    /// Theme to use (dark, light)
    #[arg(short, long)]
    theme: Option<String>,

    /// Print the transcript with OSC 8 hyperlinks to stdout and exit
    #[arg(long)]
    dump: bool,
}

/// Per-message geometry for one frame: where the body landed in the
/// flattened transcript, plus the layout and matches used to render it.
struct MessageBlock {
    body_top: usize,
    layout: TextLayout,
    matches: Vec<LinkMatch>,
}

struct App {
    messages: Vec<Message>,
    theme: Theme,
    detector: UrlDetector,
    recognizer: GestureRecognizer,
    scroll: usize,
    status: Option<String>,
    pending_delete: Option<usize>,
    blocks: Vec<MessageBlock>,
    text_area: Rect,
}

impl App {
    fn new(messages: Vec<Message>, theme: Theme, config: &Config) -> Self {
        Self {
            messages,
            theme,
            detector: UrlDetector::new(),
            recognizer: GestureRecognizer::new(config.long_press()),
            scroll: 0,
            status: None,
            pending_delete: None,
            blocks: Vec::new(),
            text_area: Rect::default(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let args = Args::parse();
    let config = Config::load()?;
    let theme = Theme::from_name(args.theme.as_deref().unwrap_or(&config.theme))
        .with_link_underline(config.link_underline);
    let messages = demo_transcript();

    if args.dump {
        dump_transcript(&messages, 80);
        return Ok(());
    }

    run_viewer(App::new(messages, theme, &config))
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn demo_transcript() -> Vec<Message> {
    vec![
        Message::peer(
            "hey! build notes are up at https://ci.example.com/runs/1842 if you want to skim",
        ),
        Message::own("nice, short summary at http://a.com and the full log is linked from there"),
        Message::peer(
            "mirrors: https://mirror-a.example.org/pkg and https://mirror-b.example.org/pkg \
(either works)",
        ),
        Message::tip("Thanks for the review! \u{2615}"),
        Message::own("will read tonight"),
        Message::notice(
            "Click a link to open it. Press and hold any message to copy it; \
your own messages can be deleted from there.",
        ),
    ]
}

fn run_viewer(mut app: App) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Up => app.scroll = app.scroll.saturating_sub(1),
                    KeyCode::Down => app.scroll = app.scroll.saturating_add(1),
                    KeyCode::Char('d') => confirm_delete(app),
                    KeyCode::Esc => dismiss_delete(app),
                    _ => {}
                },
                Event::Mouse(mouse) => on_mouse(app, mouse),
                _ => {}
            }
        }

        // Long presses recognize between input events.
        if let Some(gesture) = app.recognizer.tick(Instant::now()) {
            on_gesture(app, gesture);
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_color)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "linkview",
        app.theme.title_style,
    )));
    frame.render_widget(title, chunks[0]);

    // The transcript is rebuilt every frame; layout and matches are never
    // cached across content changes.
    let width = chunks[1].width as usize;
    let (lines, blocks) = build_transcript(
        &app.messages,
        &app.detector,
        &app.theme,
        width,
        app.pending_delete,
    );
    let max_scroll = lines.len().saturating_sub(chunks[1].height as usize);
    if app.scroll > max_scroll {
        app.scroll = max_scroll;
    }
    app.blocks = blocks;
    app.text_area = chunks[1];

    let transcript = Paragraph::new(Text::from(lines)).scroll((app.scroll as u16, 0));
    frame.render_widget(transcript, chunks[1]);

    let status = app
        .status
        .clone()
        .unwrap_or_else(|| "click: open link | hold: copy | q: quit".to_string());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status, app.theme.status_style))),
        chunks[2],
    );
}

fn build_transcript(
    messages: &[Message],
    detector: &UrlDetector,
    theme: &Theme,
    width: usize,
    pending_delete: Option<usize>,
) -> (Vec<Line<'static>>, Vec<MessageBlock>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut blocks = Vec::with_capacity(messages.len());

    for (index, message) in messages.iter().enumerate() {
        let mut header = vec![Span::styled(
            format!("{}:", message.role.label()),
            theme.prefix_style,
        )];
        if pending_delete == Some(index) {
            header.push(Span::styled(
                "  [delete? d confirms, Esc keeps]",
                theme.notice_text_style,
            ));
        }
        lines.push(Line::from(header));

        let matches = detector.detect(&message.content);
        let layout = TextLayout::new(&message.content, width);
        let rendered = render_text(
            &message.content,
            &matches,
            &layout,
            body_style(theme, message.role),
            theme.link_style,
        );

        let body_top = lines.len();
        lines.extend(rendered.lines);
        blocks.push(MessageBlock {
            body_top,
            layout,
            matches,
        });

        lines.push(Line::from(""));
    }

    (lines, blocks)
}

fn body_style(theme: &Theme, role: MessageRole) -> Style {
    match role {
        MessageRole::Own => theme.own_text_style,
        MessageRole::Peer => theme.peer_text_style,
        MessageRole::Tip => theme.tip_text_style,
        MessageRole::Notice => theme.notice_text_style,
    }
}

fn on_mouse(app: &mut App, mouse: MouseEvent) {
    let now = Instant::now();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.recognizer.press(mouse.column, mouse.row, now);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.recognizer.moved(mouse.column, mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(gesture) = app.recognizer.release(now) {
                on_gesture(app, gesture);
            }
        }
        MouseEventKind::ScrollUp => app.scroll = app.scroll.saturating_sub(1),
        MouseEventKind::ScrollDown => app.scroll = app.scroll.saturating_add(1),
        _ => {}
    }
}

fn on_gesture(app: &mut App, gesture: Gesture) {
    let (column, row) = match gesture {
        Gesture::Tap { column, row } | Gesture::LongPress { column, row } => (column, row),
    };
    let Some((index, line, col)) = locate(app, column, row) else {
        return;
    };

    let actions = {
        let message = &app.messages[index];
        let block = &app.blocks[index];
        let ctx = message.interaction(&block.matches);
        match gesture {
            Gesture::Tap { .. } => tap_action(&block.layout, &ctx, line, col)
                .into_iter()
                .collect::<Vec<_>>(),
            Gesture::LongPress { .. } => long_press_actions(&message.content, &ctx),
        }
    };

    for action in actions {
        apply_action(app, index, action);
    }
}

/// Map a screen cell to (message index, body line, column). `None` when the
/// cell is outside the transcript or between messages.
fn locate(app: &App, column: u16, row: u16) -> Option<(usize, usize, usize)> {
    let area = app.text_area;
    if row < area.y || row >= area.y + area.height || column < area.x || column >= area.x + area.width
    {
        return None;
    }
    let line = (row - area.y) as usize + app.scroll;
    let col = (column - area.x) as usize;

    for (index, block) in app.blocks.iter().enumerate() {
        if line >= block.body_top && line < block.body_top + block.layout.line_count() {
            return Some((index, line - block.body_top, col));
        }
    }
    None
}

fn apply_action(app: &mut App, index: usize, action: SurfaceAction) {
    match action {
        SurfaceAction::OpenLink(url) => {
            launcher::open_url(&url);
            app.status = Some(format!("Opening {url}"));
        }
        SurfaceAction::Pulse => ring_bell(),
        SurfaceAction::Copy { text, kind } => match clipboard::write(&text) {
            Ok(()) => {
                app.status = Some(
                    match kind {
                        CopyKind::Tip => "Tip copied to clipboard",
                        CopyKind::Message => "Message copied to clipboard",
                    }
                    .to_string(),
                );
            }
            Err(err) => app.status = Some(err),
        },
        SurfaceAction::RequestDelete => {
            app.pending_delete = Some(index);
            app.status = Some("Delete this message? d confirms, Esc keeps".to_string());
        }
    }
}

fn confirm_delete(app: &mut App) {
    if let Some(index) = app.pending_delete.take() {
        if index < app.messages.len() {
            app.messages.remove(index);
        }
        app.status = Some("Message deleted".to_string());
    }
}

fn dismiss_delete(app: &mut App) {
    if app.pending_delete.take().is_some() {
        app.status = Some("Message kept".to_string());
    }
}

fn ring_bell() {
    let mut out = io::stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}

fn dump_transcript(messages: &[Message], width: usize) {
    let detector = UrlDetector::new();
    for message in messages {
        println!("{}:", message.role.label());
        let matches = detector.detect(&message.content);
        let layout = TextLayout::new(&message.content, width);
        let rendered = render_text(
            &message.content,
            &matches,
            &layout,
            Style::default(),
            Style::default(),
        );
        for line in hyperlink::encode_lines(&rendered) {
            println!("  {line}");
        }
        println!();
    }
}
