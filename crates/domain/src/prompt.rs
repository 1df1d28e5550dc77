/// Blocking questions the pipeline may put to the operator
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait OperatorPrompt: Send + Sync {
    /// Ask for the admin password; `None` means the operator cancelled
    fn ask_password(&self) -> Option<String>;
}
