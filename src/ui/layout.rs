use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub celebration_area: Option<Rect>,
    pub metric_areas: [Rect; 3],
    pub list_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: brand, page title, date and action buttons
/// - Celebration banner (only while celebrating)
/// - Metrics: three cards side by side
/// - Task list fills the rest
pub fn create_layout(area: Rect, celebrating: bool) -> MainLayout {
    let banner_height = if celebrating { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Keybindings bar
            Constraint::Length(4),             // Header
            Constraint::Length(banner_height), // Celebration
            Constraint::Length(4),             // Metrics cards
            Constraint::Min(0),                // Task list
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(main_chunks[3]);

    MainLayout {
        keybindings_area: main_chunks[0],
        header_area: main_chunks[1],
        celebration_area: celebrating.then(|| main_chunks[2]),
        metric_areas: [cards[0], cards[1], cards[2]],
        list_area: main_chunks[4],
    }
}

/// Create centered modal area (for text prompts)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(7),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area, false);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.header_area.height, 4);
        assert!(layout.celebration_area.is_none());
        assert!(layout.metric_areas.iter().all(|a| a.height == 4));
        assert_eq!(layout.list_area.height, 41);

        let celebrating = create_layout(area, true);
        assert_eq!(celebrating.celebration_area.map(|a| a.height), Some(3));
        assert_eq!(celebrating.list_area.height, 38);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 7);
    }
}
