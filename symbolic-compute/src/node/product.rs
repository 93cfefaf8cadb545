use super::Node;

/// A chain of factors joined by `*` and `/`, as written in the source, e.g. `a * b / c`.
///
/// The parser collects a term into a [`Product`] and then calls [`Product::fold`] to turn it into
/// nodes the rewrite engine understands. A [`Product`] never appears in an expression tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    /// Each factor, paired with `true` if it multiplies the factors before it, or `false` if it
    /// divides them.
    factors: Vec<(Node, bool)>,
}

impl Product {
    /// Creates an empty product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a factor that multiplies the factors before it.
    pub fn multiply(&mut self, factor: Node) {
        self.factors.push((factor, true));
    }

    /// Appends a factor that divides the factors before it.
    pub fn divide(&mut self, factor: Node) {
        self.factors.push((factor, false));
    }

    /// Returns the number of factors in the product.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns true if the product has no factors.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Folds the factors from left to right into a chain of [`Node::Multi`] and [`Node::Divide`]
    /// nodes, so `a * b / c` becomes `Divide(Multi(a, b), c)`.
    ///
    /// A product with no factors folds to `1`. If the first factor is a divisor, it divides `1`.
    pub fn fold(self) -> Node {
        let mut factors = self.factors.into_iter();
        let mut acc = match factors.next() {
            Some((factor, true)) => factor,
            Some((factor, false)) => Node::divide(Node::integer(1), factor),
            None => return Node::integer(1),
        };

        for (factor, multiply) in factors {
            acc = if multiply {
                Node::Multi(vec![acc, factor])
            } else {
                Node::divide(acc, factor)
            };
        }

        acc
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn empty_folds_to_one() {
        assert_eq!(Product::new().fold(), Node::integer(1));
    }

    #[test]
    fn single_factor() {
        let mut product = Product::new();
        product.multiply(Node::unknown("x"));
        assert_eq!(product.fold(), Node::unknown("x"));
    }

    #[test]
    fn folds_left_to_right() {
        let mut product = Product::new();
        product.multiply(Node::unknown("a"));
        product.multiply(Node::unknown("b"));
        product.divide(Node::unknown("c"));
        product.multiply(Node::unknown("d"));
        assert_eq!(product.len(), 4);

        assert_eq!(product.fold(), Node::Multi(vec![
            Node::divide(
                Node::Multi(vec![Node::unknown("a"), Node::unknown("b")]),
                Node::unknown("c"),
            ),
            Node::unknown("d"),
        ]));
    }

    #[test]
    fn leading_divisor_divides_one() {
        let mut product = Product::new();
        product.divide(Node::integer(4));
        assert_eq!(product.fold(), Node::divide(Node::integer(1), Node::integer(4)));
    }
}
