/// A non-fatal diagnostic accumulated while building a function or
/// road-space model, e.g. "dropped an equal-key width entry".
///
/// Every repair that produces one of these also logs at `warn` through
/// the `log` facade at the point of repair, so a caller gets the
/// diagnostic twice: once accumulated here for programmatic inspection,
/// once in whatever log sink the host binary configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMessage(pub String);

impl ReportMessage {
    /// Builds a report message from any displayable value.
    pub fn new(text: impl Into<String>) -> Self { ReportMessage(text.into()) }
}

impl std::fmt::Display for ReportMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// The result-with-message idiom: a successful value paired with the
/// non-fatal warnings accumulated while producing it.
///
/// Modeled after the source's practice of threading both a return value
/// and accumulated repair diagnostics out of a single constructor call,
/// without making the diagnostics fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct WithReport<T> {
    /// the constructed value
    pub value: T,
    /// non-fatal diagnostics accumulated while constructing `value`
    pub messages: Vec<ReportMessage>,
}

impl<T> WithReport<T> {
    /// Wraps `value` with no accumulated messages.
    pub fn clean(value: T) -> Self { WithReport { value, messages: Vec::new() } }

    /// Wraps `value` with the given messages.
    pub fn new(value: T, messages: Vec<ReportMessage>) -> Self { WithReport { value, messages } }

    /// Applies `f` to the wrapped value, keeping the accumulated messages.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WithReport<U> {
        WithReport { value: f(self.value), messages: self.messages }
    }

    /// Merges `other`'s messages into `self`'s, replacing the value.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> WithReport<U>) -> WithReport<U> {
        let WithReport { value, mut messages } = self;
        let next = f(value);
        messages.extend(next.messages);
        WithReport { value: next.value, messages }
    }
}
