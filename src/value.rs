use crate::context::ContextId;
use crate::error::{RuntimeError, Span};
use std::fmt;

/// Runtime representation of a scalar number produced while evaluating an
/// expression tree.
///
/// The payload is fixed at construction; arithmetic never mutates an
/// operand, it allocates a new value. The span and context slots start
/// empty and are stamped by the evaluator after the fact via the fluent
/// [`with_span`](Self::with_span) / [`with_context`](Self::with_context)
/// builders.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericValue {
    value: f64,
    span: Option<Span>,
    context: Option<ContextId>,
}

impl NumericValue {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            span: None,
            context: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn context(&self) -> Option<ContextId> {
        self.context
    }

    /// Fluent: overwrites the held span, `None` clears it.
    pub fn with_span(mut self, span: Option<Span>) -> Self {
        self.span = span;
        self
    }

    /// Fluent: overwrites the held frame handle, `None` clears it.
    pub fn with_context(mut self, context: Option<ContextId>) -> Self {
        self.context = context;
        self
    }

    // Binary arithmetic. Each operation produces a fresh value whose
    // context is inherited from the left operand; the right operand's
    // metadata is discarded. No span is set on the result, the caller
    // stamps it once it knows the full expression extent.

    pub fn add(&self, other: &NumericValue) -> Result<NumericValue, RuntimeError> {
        Ok(NumericValue::new(self.value + other.value).with_context(self.context))
    }

    pub fn sub(&self, other: &NumericValue) -> Result<NumericValue, RuntimeError> {
        Ok(NumericValue::new(self.value - other.value).with_context(self.context))
    }

    pub fn mul(&self, other: &NumericValue) -> Result<NumericValue, RuntimeError> {
        Ok(NumericValue::new(self.value * other.value).with_context(self.context))
    }

    /// Division guards against a zero divisor before dividing. The check
    /// is exact equality, not an epsilon test. The diagnostic points at
    /// the divisor's span but carries the dividend's context, so the
    /// error is attributed to the frame reducing the sub-expression.
    pub fn div(&self, other: &NumericValue) -> Result<NumericValue, RuntimeError> {
        if other.value == 0.0 {
            return Err(RuntimeError::division_by_zero(other.span, self.context));
        }
        Ok(NumericValue::new(self.value / other.value).with_context(self.context))
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // f64's Display is the minimal decimal form: integral values
        // print without a fractional part.
        write!(f, "{}", self.value)
    }
}
