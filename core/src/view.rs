use crate::board::Mark;

/// Presentation boundary. The session pushes every visible change through
/// this trait; the client renders from it and never reaches into the core.
pub trait GameView: Send + Sync + 'static {
    fn show_status(&self, text: &str);

    fn mark_cell(&self, index: usize, mark: Mark);

    fn highlight_line(&self, line: [usize; 3]);

    fn clear_board(&self);
}
