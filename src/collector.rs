//! The mutable-reduction contract.

/// A three-phase mutable reduction: a supplier creates an empty
/// accumulation container, an accumulator folds one element into it, and a
/// finisher transforms the filled container into the result type.
///
/// A `Collector` is independent of any pipeline — [`Collector::apply`]
/// runs the three phases over a plain input vector in encounter order —
/// and reusable: `apply` borrows `&self`, so one collector value can
/// reduce many inputs (the supplier provides a fresh container each time).
pub struct Collector<T, A, R> {
    pub(crate) supplier: Box<dyn Fn() -> A>,
    pub(crate) accumulator: Box<dyn Fn(&mut A, T)>,
    pub(crate) finisher: Box<dyn Fn(A) -> R>,
}

impl<T, A, R> Collector<T, A, R> {
    pub fn of(
        supplier: impl Fn() -> A + 'static,
        accumulator: impl Fn(&mut A, T) + 'static,
        finisher: impl Fn(A) -> R + 'static,
    ) -> Self {
        Collector {
            supplier: Box::new(supplier),
            accumulator: Box::new(accumulator),
            finisher: Box::new(finisher),
        }
    }

    /// Reduce `input` through the three phases.
    pub fn apply(&self, input: Vec<T>) -> R {
        let mut container = (self.supplier)();
        for element in input {
            (self.accumulator)(&mut container, element);
        }
        (self.finisher)(container)
    }
}
