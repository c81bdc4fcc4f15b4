/// Everything the user (or the clock) can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    GoTop,
    GoBottom,
    DrillIn,
    NavigateBack,
    StartSearch,
    SearchInput(char),
    SearchConfirm,
    SearchCancel,
    ToggleAiOnly,
    TogglePerturbationOnly,
    NextCategory,
    PrevCategory,
    OpenDatePicker,
    NextDate,
    PrevDate,
    Reload,
    CycleTheme,
    SaveConfig,
    ToggleHelp,
    ClickAt(u16, u16),
    Resize(u16, u16),
    Tick,
    None,
}
