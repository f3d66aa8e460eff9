use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Page background and foreground
fn base(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Black).bg(Color::White),
        Theme::Dark => Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0x13, 0x13, 0x16)),
    }
}

/// Card and panel background
fn card(theme: Theme) -> Style {
    match theme {
        Theme::Light => base(theme),
        Theme::Dark => Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0x1D, 0x1D, 0x20)),
    }
}

/// Default text style
pub fn default_style(theme: Theme) -> Style {
    base(theme)
}

/// Panel style
pub fn card_style(theme: Theme) -> Style {
    card(theme)
}

/// Selected row highlight style
pub fn selected_style(theme: Theme) -> Style {
    let bg = match theme {
        Theme::Light => Color::Rgb(0xE5, 0xE7, 0xEB),
        Theme::Dark => Color::Rgb(0x2A, 0x2D, 0x34),
    };
    card(theme).bg(bg).add_modifier(Modifier::BOLD)
}

/// Secondary text (dates, hints, per-task totals)
pub fn muted_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::DarkGray,
        Theme::Dark => Color::Gray,
    };
    card(theme).fg(fg)
}

/// Completed task title
pub fn done_style(theme: Theme) -> Style {
    muted_style(theme).add_modifier(Modifier::CROSSED_OUT)
}

/// Running stopwatch badge style
pub fn running_style(theme: Theme) -> Style {
    card(theme).fg(Color::Magenta).add_modifier(Modifier::BOLD)
}

/// Brand name in the header
pub fn brand_style(theme: Theme) -> Style {
    base(theme)
        .fg(Color::Rgb(0xFF, 0x45, 0x00))
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style(theme: Theme) -> Style {
    base(theme).add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style(theme: Theme) -> Style {
    let fg = match theme {
        Theme::Light => Color::Gray,
        Theme::Dark => Color::DarkGray,
    };
    base(theme).fg(fg)
}

/// Big numbers on the metric cards
pub fn metric_value_style(theme: Theme) -> Style {
    card(theme).add_modifier(Modifier::BOLD)
}

/// Icon colour of each metric card
pub fn metric_accent_style(theme: Theme, index: usize) -> Style {
    let fg = match index {
        0 => Color::Blue,
        1 => Color::Green,
        _ => Color::Indexed(99), // indigo
    };
    card(theme).fg(fg)
}

/// Action that can be taken right now
pub fn action_style(theme: Theme) -> Style {
    base(theme).add_modifier(Modifier::BOLD)
}

/// Destructive action ("remove completed")
pub fn danger_style(theme: Theme) -> Style {
    base(theme).fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Action that is currently unavailable
pub fn disabled_style(theme: Theme) -> Style {
    muted_style(theme).add_modifier(Modifier::DIM)
}

/// Modal background style
pub fn modal_bg_style(theme: Theme) -> Style {
    card(theme)
}

/// Modal title style
pub fn modal_title_style(theme: Theme) -> Style {
    card(theme).fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style(theme: Theme) -> Style {
    muted_style(theme)
}

/// Confetti colours, cycled by the celebration banner
pub const CONFETTI_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Rgb(0xFF, 0x8C, 0x00),
];
