//! Typed error handling for the transform core.
//!
//! Every detected violation is a hard failure for the current compile
//! unit: silently skipping an ambiguous call site would either leave a
//! runtime dependency on the eliminated library or mint a colliding
//! selector. There is no warning tier and no partial-success state.

use thiserror::Error;

use crate::ast::Span;

/// Main error type for transform operations.
///
/// Each variant names the offending generation function and, when the
/// host supplied one, the source location of the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The call carried more than one positional argument.
    #[error("`{function}` expects at most one argument")]
    ArgumentCount { function: String, span: Option<Span> },

    /// The argument was neither an inline object literal nor an
    /// identifier bound to one.
    #[error("`{function}` only accepts an argument of type object, found {found}")]
    ArgumentShape {
        function: String,
        /// What the argument actually was.
        found: String,
        span: Option<Span>,
    },

    /// An options property held a non-literal value.
    #[error("`{function}` only accepts an options object with literal values, property `{property}` is not a literal")]
    NonLiteralProperty {
        function: String,
        property: String,
        span: Option<Span>,
    },

    /// The `prefix` option was present but not a string literal.
    #[error("`{function}` expects option 'prefix' to be a string literal")]
    PrefixType { function: String, span: Option<Span> },

    /// The argument identifier resolved to a non-variable-declarator
    /// binding, or to no binding at all.
    #[error("`{function}` must not reference `{name}` from a non-variable declaration")]
    UnsupportedBinding {
        function: String,
        name: String,
        span: Option<Span>,
    },
}

impl TransformError {
    /// Create an argument-count error.
    pub fn argument_count(function: impl Into<String>, span: Option<Span>) -> Self {
        Self::ArgumentCount {
            function: function.into(),
            span,
        }
    }

    /// Create an argument-shape error describing what was found instead.
    pub fn argument_shape(
        function: impl Into<String>,
        found: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::ArgumentShape {
            function: function.into(),
            found: found.into(),
            span,
        }
    }

    /// Create a non-literal-property error.
    pub fn non_literal_property(
        function: impl Into<String>,
        property: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::NonLiteralProperty {
            function: function.into(),
            property: property.into(),
            span,
        }
    }

    /// Create a prefix-type error.
    pub fn prefix_type(function: impl Into<String>, span: Option<Span>) -> Self {
        Self::PrefixType {
            function: function.into(),
            span,
        }
    }

    /// Create an unsupported-binding error.
    pub fn unsupported_binding(
        function: impl Into<String>,
        name: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::UnsupportedBinding {
            function: function.into(),
            name: name.into(),
            span,
        }
    }

    /// The generation function the failing call targeted.
    pub fn function_name(&self) -> &str {
        match self {
            Self::ArgumentCount { function, .. }
            | Self::ArgumentShape { function, .. }
            | Self::NonLiteralProperty { function, .. }
            | Self::PrefixType { function, .. }
            | Self::UnsupportedBinding { function, .. } => function,
        }
    }

    /// Source location of the failing call, if the host supplied spans.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::ArgumentCount { span, .. }
            | Self::ArgumentShape { span, .. }
            | Self::NonLiteralProperty { span, .. }
            | Self::PrefixType { span, .. }
            | Self::UnsupportedBinding { span, .. } => *span,
        }
    }
}

/// Convenience type alias for transform results.
pub type TransformResult<T> = Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_function() {
        let err = TransformError::argument_count("createSelector", None);
        assert_eq!(
            err.to_string(),
            "`createSelector` expects at most one argument"
        );
        assert_eq!(err.function_name(), "createSelector");
    }

    #[test]
    fn test_argument_shape_reports_found_kind() {
        let err = TransformError::argument_shape("createSelector", "a string literal", None);
        assert!(err.to_string().contains("a string literal"));
    }

    #[test]
    fn test_non_literal_property_names_property() {
        let err = TransformError::non_literal_property("createSelector", "dynamic", None);
        assert!(err.to_string().contains("`dynamic`"));
    }

    #[test]
    fn test_span_is_carried() {
        let span = Span { line: 4, column: 9 };
        let err = TransformError::prefix_type("createLiveSelector", Some(span));
        assert_eq!(err.span(), Some(span));
        assert_eq!(err.function_name(), "createLiveSelector");
    }
}
