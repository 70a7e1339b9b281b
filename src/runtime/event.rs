/// Actions emitted by widgets in `InteractionResult`.
/// These flow upward from widgets to whoever owns the widget's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    /// A validated request to move `target` to `page`. The owner applies it
    /// (or not) and feeds the new state back.
    PageRequested { target: String, page: usize },
}
