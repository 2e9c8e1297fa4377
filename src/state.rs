use crate::goto_prompt::GoToPrompt;

#[derive(Debug, PartialEq, Clone, Default)]
pub enum Mode {
    #[default]
    Presenting,       // Navigation keys and pointer are live
    Help,             // Key binding overlay is shown
    GoTo(GoToPrompt), // Collecting a slide number
}
