/// Events that can occur in the tracker TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Begin tracking from zero readings
    Start,
    /// Pause tracking, keeping the readings
    Stop,
    /// Continue tracking without a reset
    Resume,
    /// Open the configuration editor
    OpenEditor,
    /// Type a character into the active editor field
    EditorInput(char),
    /// Delete the last character of the active editor field
    EditorBackspace,
    /// Move focus to the other editor field
    EditorSwitchField,
    /// Parse and save the editor fields
    EditorSave,
    /// Close the editor, discarding edits
    EditorCancel,
    /// No action
    None,
}
