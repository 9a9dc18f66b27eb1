//! Illustrative product catalog
//!
//! A tiny domain used to demonstrate the pattern: products with a name, a
//! color, and a size, one leaf specification per filterable attribute,
//! and the hard-coded [`ProductFilter`] kept as the counter-example the
//! specifications replace. Nothing here is load-bearing for the core; it
//! exists so the examples and integration tests have something concrete
//! to filter.
//!
//! # Example
//!
//! ```rust
//! use specsieve::catalog::*;
//! use specsieve::spec::SpecificationExt;
//! use specsieve::sieve::sieve;
//!
//! let stock = vec![
//!     Product::new("apple", Color::Green, Size::Small),
//!     Product::new("tree", Color::Green, Size::Large),
//!     Product::new("house", Color::Blue, Size::Large),
//! ];
//!
//! let big_and_blue: Vec<Product> =
//!     sieve(stock, color_is(Color::Blue).and(size_is(Size::Large))).collect();
//! assert_eq!(big_and_blue[0].name, "house");
//! ```

use crate::spec::Specification;

/// Product color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Red products.
    Red,
    /// Green products.
    Green,
    /// Blue products.
    Blue,
}

/// Product size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Size {
    /// Fits in a hand.
    Small,
    /// Fits in a room.
    Medium,
    /// Does not fit indoors.
    Large,
}

/// An item in the catalog.
///
/// Every field is mandatory and the value is immutable once built, so a
/// plain constructor is all the construction machinery needed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Color attribute.
    pub color: Color,
    /// Size attribute.
    pub size: Size,
}

impl Product {
    /// Create a product.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Product {
            name: name.into(),
            color,
            size,
        }
    }
}

/// Leaf specification: the product has the given color.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorIs(pub Color);

impl Specification<Product> for ColorIs {
    #[inline]
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.0
    }
}

/// Create a specification matching products of the given color.
///
/// # Example
///
/// ```rust
/// use specsieve::catalog::*;
/// use specsieve::spec::Specification;
///
/// let apple = Product::new("apple", Color::Green, Size::Small);
/// assert!(color_is(Color::Green).is_satisfied(&apple));
/// assert!(!color_is(Color::Blue).is_satisfied(&apple));
/// ```
pub fn color_is(color: Color) -> ColorIs {
    ColorIs(color)
}

/// Leaf specification: the product has the given size.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeIs(pub Size);

impl Specification<Product> for SizeIs {
    #[inline]
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.0
    }
}

/// Create a specification matching products of the given size.
pub fn size_is(size: Size) -> SizeIs {
    SizeIs(size)
}

/// Leaf specification: the product has exactly the given name.
///
/// Exact match only; there is deliberately no substring or fuzzy form.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameIs(pub String);

impl Specification<Product> for NameIs {
    #[inline]
    fn is_satisfied(&self, item: &Product) -> bool {
        item.name == self.0
    }
}

/// Create a specification matching products with exactly the given name.
pub fn name_is(name: impl Into<String>) -> NameIs {
    NameIs(name.into())
}

// This type violates the open/closed principle: supporting a new
// filterable attribute means adding another method to a type that is
// already written and tested. The specifications above solve the same
// problem by addition instead of modification. Kept as the motivating
// counter-example.
/// Hard-coded per-attribute filter, the approach the pattern replaces.
#[derive(Clone, Copy, Default, Debug)]
pub struct ProductFilter;

impl ProductFilter {
    /// Filter by color, hard-coded.
    pub fn by_color<'a>(
        &self,
        products: &'a [Product],
        color: Color,
    ) -> impl Iterator<Item = &'a Product> {
        products.iter().filter(move |p| p.color == color)
    }

    /// Filter by size, hard-coded.
    pub fn by_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
    ) -> impl Iterator<Item = &'a Product> {
        products.iter().filter(move |p| p.size == size)
    }
}
