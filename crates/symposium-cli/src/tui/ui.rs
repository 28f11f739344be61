use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use symposium::{PhilosopherState, SeatSnapshot};

use crate::tui::app::TuiApp;

pub fn render_ui(f: &mut Frame, app: &TuiApp) {
    let size = f.size();

    // Title bar + table + controls bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(f, app, main_chunks[0]);
    render_table(f, app, main_chunks[1]);
    render_controls_bar(f, app, main_chunks[2]);
}

fn render_title_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
    let paused = if app.paused { " [display paused]" } else { "" };
    let title = format!(
        " Symposium - {} philosophers - up {}{} ",
        app.seats.len(),
        app.uptime(),
        paused
    );

    let title_paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );

    f.render_widget(title_paragraph, area);
}

fn render_table(f: &mut Frame, app: &TuiApp, area: Rect) {
    let block = Block::default().title(" Table ").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(app.seats.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_header_row(f, rows[0]);
    for (index, seat) in app.seats.iter().enumerate() {
        render_seat_row(f, seat, rows[index + 1]);
    }
}

fn seat_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(24),
        ])
        .split(area)
}

fn render_header_row(f: &mut Frame, area: Rect) {
    let chunks = seat_columns(area);
    let header_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD);

    f.render_widget(Paragraph::new(" ID").style(header_style), chunks[0]);
    f.render_widget(Paragraph::new("State").style(header_style), chunks[1]);
    f.render_widget(Paragraph::new("Progress").style(header_style), chunks[2]);
    f.render_widget(Paragraph::new("Occurrences").style(header_style), chunks[3]);
}

fn render_seat_row(f: &mut Frame, seat: &SeatSnapshot, area: Rect) {
    let chunks = seat_columns(area);
    let color = state_color(seat.state);

    let id = Paragraph::new(format!("{:>3}", seat.id)).style(Style::default().fg(color));
    f.render_widget(id, chunks[0]);

    let state =
        Paragraph::new(format!("{:<9}", seat.state.label())).style(Style::default().fg(color));
    f.render_widget(state, chunks[1]);

    let gauge = if seat.state == PhilosopherState::Hungry {
        Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(0.0)
            .label("waiting")
    } else {
        let progress = seat.progress();
        Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(progress)
            .label(format!("{:>3.0}%", progress * 100.0))
    };
    f.render_widget(gauge, chunks[2]);

    let counts = Paragraph::new(format!(
        " Eat:{:>4}  Think:{:>4}",
        seat.eat_count, seat.think_count
    ))
    .style(Style::default().fg(color));
    f.render_widget(counts, chunks[3]);
}

fn render_controls_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
    let controls = if app.paused {
        " Controls: [q]uit [p] resume display "
    } else {
        " Controls: [q]uit [p]ause display "
    };

    let controls_paragraph =
        Paragraph::new(controls).style(Style::default().fg(Color::Black).bg(Color::Gray));

    f.render_widget(controls_paragraph, area);
}

fn state_color(state: PhilosopherState) -> Color {
    match state {
        PhilosopherState::Thinking => Color::Yellow,
        PhilosopherState::Hungry => Color::Red,
        PhilosopherState::Eating => Color::Green,
    }
}
