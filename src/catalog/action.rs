/// The closed set of document transformation actions.
///
/// `all()` returns the fixed menu display order, with the interactive
/// follow-up mode last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Summarize,
    ExtractEntities,
    ExtractTables,
    AnswerQuestions,
    CompareDocuments,
    TransformStyle,
    ExpandContent,
    Translate,
    Recommend,
    DocumentCode,
    GenerateQuiz,
    InteractiveQa,
}

impl Action {
    /// All actions in menu display order
    pub fn all() -> &'static [Action] {
        &[
            Action::Summarize,
            Action::ExtractEntities,
            Action::ExtractTables,
            Action::AnswerQuestions,
            Action::CompareDocuments,
            Action::TransformStyle,
            Action::ExpandContent,
            Action::Translate,
            Action::Recommend,
            Action::DocumentCode,
            Action::GenerateQuiz,
            Action::InteractiveQa,
        ]
    }

    /// Human-readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            Action::Summarize => "Summarize Text",
            Action::ExtractEntities => "Extract Entities",
            Action::ExtractTables => "Extract Tables/Lists",
            Action::AnswerQuestions => "Answer Questions",
            Action::CompareDocuments => "Compare with Another Document",
            Action::TransformStyle => "Transform Style",
            Action::ExpandContent => "Expand Content",
            Action::Translate => "Translate + Localize Content",
            Action::Recommend => "Personalized Content Recommendation",
            Action::DocumentCode => "Generate Code Documentation",
            Action::GenerateQuiz => "Generate Quiz",
            Action::InteractiveQa => "Interactive Q&A",
        }
    }

    /// Names of the parameters that must be present and non-empty before
    /// this action's prompt can be rendered
    pub fn required_parameters(&self) -> &'static [&'static str] {
        match self {
            Action::Summarize => &["length", "format"],
            Action::AnswerQuestions => &["questions"],
            Action::TransformStyle => &["style", "audience"],
            Action::ExpandContent => &["section"],
            Action::Translate => &["target_language"],
            Action::Recommend => &["user_profile"],
            Action::DocumentCode => &["code"],
            Action::InteractiveQa => &["question"],
            Action::ExtractEntities
            | Action::ExtractTables
            | Action::CompareDocuments
            | Action::GenerateQuiz => &[],
        }
    }

    /// Fixed value choices for enumerated parameters
    pub fn parameter_choices(&self, name: &str) -> Option<&'static [&'static str]> {
        match (self, name) {
            (Action::Summarize, "length") => Some(&["short", "medium", "detailed"]),
            (Action::Summarize, "format") => Some(&["paragraph", "bullets"]),
            _ => None,
        }
    }

    /// Whether this action needs a second document loaded before it can run
    pub fn needs_second_document(&self) -> bool {
        matches!(self, Action::CompareDocuments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_actions_in_menu() {
        assert_eq!(Action::all().len(), 12);
        assert_eq!(Action::all()[0], Action::Summarize);
        assert_eq!(Action::all()[11], Action::InteractiveQa);
    }

    #[test]
    fn test_summarize_requires_length_and_format() {
        assert_eq!(Action::Summarize.required_parameters(), &["length", "format"]);
    }

    #[test]
    fn test_translate_requires_target_language() {
        assert_eq!(Action::Translate.required_parameters(), &["target_language"]);
    }

    #[test]
    fn test_only_compare_needs_second_document() {
        for action in Action::all() {
            assert_eq!(
                action.needs_second_document(),
                *action == Action::CompareDocuments
            );
        }
    }

    #[test]
    fn test_summarize_parameter_choices() {
        assert_eq!(
            Action::Summarize.parameter_choices("length"),
            Some(&["short", "medium", "detailed"][..])
        );
        assert_eq!(Action::Summarize.parameter_choices("other"), None);
        assert_eq!(Action::Translate.parameter_choices("target_language"), None);
    }
}
