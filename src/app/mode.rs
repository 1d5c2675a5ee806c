#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Calculating,
    Help,
    Quit,
}

impl AppMode {
    pub fn label(&self) -> &'static str {
        match self {
            AppMode::Calculating => " CALC ",
            AppMode::Help => " HELP ",
            AppMode::Quit => " QUIT ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_labels() {
        assert_eq!(AppMode::Calculating.label(), " CALC ");
        assert_eq!(AppMode::Help.label(), " HELP ");
        assert_eq!(AppMode::Quit.label(), " QUIT ");
    }
}
