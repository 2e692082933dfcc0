/// Anything that can render a one-line textual statement
pub trait Statement {
    fn statement(&self) -> String;
}

/// Render the statement of any [`Statement`] implementor
pub fn statement<S: Statement + ?Sized>(source: &S) -> String {
    source.statement()
}
