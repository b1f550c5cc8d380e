//! Render faults and their captured form.

use std::fmt;
use thiserror::Error;

use crate::variant::VariantError;

/// A fault raised while a view is being rendered.
///
/// Faults travel up the render call stack to the nearest
/// [`ErrorBoundary`](crate::ErrorBoundary). A fault that escapes every
/// boundary is returned to the caller of the render pass.
#[derive(Debug, Error)]
pub enum RenderFault {
    /// Raised by a component's own render logic
    #[error("{0}")]
    Raised(String),

    /// A component template failed to load or render
    #[error("template '{name}' failed: {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// A component was configured with an unknown style key
    #[error(transparent)]
    Variant(#[from] VariantError),
}

impl RenderFault {
    /// Creates a fault with a plain message.
    pub fn new(message: impl Into<String>) -> Self {
        RenderFault::Raised(message.into())
    }
}

/// Where a fault was raised: the component stack from the root of the render
/// pass down to the component that faulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultOrigin {
    stack: Vec<String>,
}

impl FaultOrigin {
    pub(crate) fn new(stack: Vec<String>) -> Self {
        Self { stack }
    }

    /// Drops the outermost `depth` frames.
    pub(crate) fn below(mut self, depth: usize) -> Self {
        self.stack.drain(..depth.min(self.stack.len()));
        self
    }

    /// The innermost component, if the fault was raised inside one.
    pub fn component(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Component names, outermost first.
    pub fn stack(&self) -> &[String] {
        &self.stack
    }
}

impl fmt::Display for FaultOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stack.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.stack.join(" > "))
    }
}

/// A fault recorded by an error boundary.
#[derive(Debug)]
pub struct CapturedFault {
    message: String,
    origin: FaultOrigin,
    fault: RenderFault,
}

impl CapturedFault {
    pub(crate) fn new(fault: RenderFault, origin: FaultOrigin) -> Self {
        Self {
            message: fault.to_string(),
            origin,
            fault,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn origin(&self) -> &FaultOrigin {
        &self.origin
    }

    /// The underlying fault, for inspecting its source.
    pub fn fault(&self) -> &RenderFault {
        &self.fault
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_fault_display() {
        assert_eq!(RenderFault::new("Test error").to_string(), "Test error");
    }

    #[test]
    fn test_variant_fault_is_transparent() {
        let err: VariantError = "unknown".parse::<crate::ButtonVariant>().unwrap_err();
        let fault = RenderFault::from(err);
        assert!(fault.to_string().starts_with("unknown variant 'unknown'"));
    }

    #[test]
    fn test_origin_display() {
        let origin = FaultOrigin::new(vec!["ErrorBoundary".into(), "ThrowError".into()]);
        assert_eq!(origin.to_string(), "ErrorBoundary > ThrowError");
        assert_eq!(origin.component(), Some("ThrowError"));
        assert_eq!(FaultOrigin::default().to_string(), "<root>");
    }

    #[test]
    fn test_captured_fault_keeps_message() {
        let captured = CapturedFault::new(RenderFault::new("boom"), FaultOrigin::default());
        assert_eq!(captured.message(), "boom");
        assert!(matches!(captured.fault(), RenderFault::Raised(_)));
    }
}
