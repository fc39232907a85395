use thiserror::Error;

/// Failures surfaced to the immediate caller. The geometry itself never
/// fails: a detached target yields a zero-size opening, the scroll-parent
/// walk terminates at the root, and the path builder tolerates any numeric
/// input. Only selector lookup can actually go wrong.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("no element matches selector {selector:?}")]
    ElementNotFound { selector: String },
}
