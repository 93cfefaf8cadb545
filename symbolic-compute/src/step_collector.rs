/// A sink for the steps taken while rewriting an expression.
///
/// [`StepCollector`] is implemented for the unit type `()`, which throws every step away. Use it
/// when only the final result matters; the rewrite engine then skips printing intermediate forms
/// entirely. [`Vec<S>`] keeps every step in order.
pub trait StepCollector<S> {
    /// Returns true if the collector keeps the steps pushed to it. If false, callers may skip
    /// building steps altogether.
    fn wants_steps(&self) -> bool {
        true
    }

    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn wants_steps(&self) -> bool {
        false
    }

    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
